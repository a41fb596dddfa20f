use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Bill, BillStore, NewBill, StorageError};

/// Keeps bills in process memory. Nothing survives a restart.
#[derive(Clone, Default)]
pub struct InMemoryBills {
    bills: Arc<RwLock<Vec<Bill>>>,
}

impl InMemoryBills {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BillStore for InMemoryBills {
    async fn list(&self) -> Result<Vec<Bill>, StorageError> {
        Ok(self.bills.read().await.clone())
    }

    async fn insert(&self, bill: NewBill) -> Result<Bill, StorageError> {
        let mut bills = self.bills.write().await;

        // ids start at 1 like a bigserial column
        let id = bills.last().map_or(1, |last| last.id + 1);
        let bill = Bill {
            id,
            description: bill.description,
            price: bill.price,
            date: bill.date,
        };

        bills.push(bill.clone());

        Ok(bill)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn new_bill(description: &str, price: f64) -> NewBill {
        NewBill {
            description: description.to_owned(),
            price,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = InMemoryBills::new();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn assigns_increasing_ids_in_insert_order() {
        let store = InMemoryBills::new();

        let first = store.insert(new_bill("Rent", 800.0)).await.unwrap();
        let second = store.insert(new_bill("Coffee", 3.5)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn clones_share_the_same_bills() {
        let store = InMemoryBills::new();
        let other = store.clone();

        store.insert(new_bill("Rent", 800.0)).await.unwrap();

        assert_eq!(other.list().await.unwrap().len(), 1);
    }
}
