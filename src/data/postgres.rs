use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{PgPool, query_as};

use super::{Bill, BillStore, NewBill, StorageError};

#[derive(Clone)]
pub struct PgBills {
    pool: PgPool,
}

impl PgBills {
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPool::connect(url)
            .await
            .context("error connecting to postgres")?;

        sqlx::migrate!()
            .run(&pool)
            .await
            .context("error running migrations")?;

        return Ok(Self::new(pool));
    }

    pub fn new(pool: PgPool) -> Self {
        return Self { pool };
    }
}

#[async_trait]
impl BillStore for PgBills {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Bill>, StorageError> {
        let rows = query_as::<_, Bill>(
            r#"
            select id, description, price, date
            from bills
            order by id asc
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    #[tracing::instrument(skip(self))]
    async fn insert(&self, bill: NewBill) -> Result<Bill, StorageError> {
        let row = query_as::<_, Bill>(
            r#"
            insert into bills (description, price, date)
            values ($1, $2, $3)
            returning id, description, price, date
            "#,
        )
        .bind(bill.description)
        .bind(bill.price)
        .bind(bill.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
