use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};

use super::{PaymentStore, StoreError};
use crate::models::PaymentId;

const INSERT_PAYMENT_SQL: &str = "INSERT INTO payments (amount, status) VALUES ($1, $2) RETURNING id";
const UPDATE_PAYMENT_STATUS_SQL: &str = "UPDATE payments SET status = $1 WHERE id = $2";

pub async fn insert_payment<'e, E>(
    executor: E,
    amount: Decimal,
    status: &str,
) -> Result<PaymentId, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, PaymentId>(INSERT_PAYMENT_SQL)
        .bind(amount)
        .bind(status)
        .fetch_one(executor)
        .await
}

pub async fn set_payment_status<'e, E>(
    executor: E,
    id: PaymentId,
    status: &str,
) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(UPDATE_PAYMENT_STATUS_SQL)
        .bind(status)
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

#[derive(Debug, Clone)]
pub struct PgPaymentStore {
    pool: PgPool,
}

impl PgPaymentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentStore for PgPaymentStore {
    async fn create_payment(&self, amount: Decimal, status: &str) -> Result<PaymentId, StoreError> {
        let id = insert_payment(&self.pool, amount, status).await?;
        Ok(id)
    }

    async fn update_payment_status(&self, id: PaymentId, status: &str) -> Result<u64, StoreError> {
        let rows = set_payment_status(&self.pool, id, status).await?;
        Ok(rows)
    }
}
