use std::collections::HashMap;

use crate::{
    data::{Bill, BillStore, NewBill, StorageError},
    date::{DateParseError, parse_bill_date},
};

pub const MAX_DESCRIPTION_LEN: usize = 250;

#[derive(Debug, thiserror::Error)]
pub enum BillError {
    #[error("invalid input: {0:?}")]
    InvalidInput(HashMap<String, String>),

    #[error(transparent)]
    Date(#[from] DateParseError),

    #[error("storage error")]
    Storage(#[from] StorageError),
}

pub async fn list(store: &dyn BillStore) -> Result<Vec<Bill>, BillError> {
    let bills = store.list().await?;

    Ok(bills)
}

/// Validates and stores a bill. `date` must look like `5 March 2024`.
pub async fn create(
    store: &dyn BillStore,
    description: &str,
    price: f64,
    date: &str,
) -> Result<Bill, BillError> {
    let mut errors: HashMap<String, String> = HashMap::new();

    let description = description.trim();
    if description.is_empty() {
        errors.insert("Description".to_owned(), "required".to_owned());
    } else if description.chars().count() > MAX_DESCRIPTION_LEN {
        errors.insert(
            "Description".to_owned(),
            format!("must be shorter than {MAX_DESCRIPTION_LEN}"),
        );
    }

    // checked after rounding, huge prices overflow to infinity
    let price = round_to_cents(price);
    if !price.is_finite() {
        errors.insert("Price".to_owned(), "must be a number".to_owned());
    } else if price < 0.0 {
        errors.insert("Price".to_owned(), "must not be negative".to_owned());
    }

    if !errors.is_empty() {
        return Err(BillError::InvalidInput(errors));
    }

    let date = parse_bill_date(date)?;

    let bill = store
        .insert(NewBill {
            description: description.to_owned(),
            price,
            date,
        })
        .await?;

    tracing::debug!("created bill {}", bill.id);

    return Ok(bill);
}

fn round_to_cents(price: f64) -> f64 {
    // + 0.0 turns -0.0 into 0.0
    (price * 100.0).round() / 100.0 + 0.0
}
