use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Config;

mod memory;
pub use memory::InMemoryBills;

mod postgres;
pub use postgres::PgBills;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
pub struct Bill {
    pub id: i64,
    pub description: String,
    pub price: f64,
    pub date: NaiveDate,
}

/// A bill that has passed validation but has no id yet.
#[derive(Debug, Clone)]
pub struct NewBill {
    pub description: String,
    pub price: f64,
    pub date: NaiveDate,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait BillStore: Send + Sync {
    /// All bills, oldest insert first.
    async fn list(&self) -> Result<Vec<Bill>, StorageError>;

    async fn insert(&self, bill: NewBill) -> Result<Bill, StorageError>;

    async fn close(&self) {}
}

/// Opens the bill store described by `config`, falling back to memory when
/// no database is configured.
pub async fn connect(config: &Config) -> Result<Arc<dyn BillStore>> {
    match config.database_url {
        Some(ref url) => {
            let bills = PgBills::connect(url)
                .await
                .context("error connecting bill store")?;

            Ok(Arc::new(bills))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, bills are kept in memory only");
            Ok(Arc::new(InMemoryBills::new()))
        }
    }
}
