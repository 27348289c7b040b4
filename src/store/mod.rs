//! Persistence for payments.
//!
//! [`PaymentStore`] is the boundary the service layer talks to. The
//! PostgreSQL implementation issues exactly one statement per call; the
//! in-memory implementation backs the tests.

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::PaymentId;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryPaymentStore;
pub use postgres::PgPaymentStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Insert a payment and return the id the store assigned to it.
    async fn create_payment(&self, amount: Decimal, status: &str) -> Result<PaymentId, StoreError>;

    /// Set the status of the payment with the given id.
    ///
    /// Returns the number of rows changed. An id that matches nothing is not
    /// an error and yields `0`.
    async fn update_payment_status(&self, id: PaymentId, status: &str) -> Result<u64, StoreError>;
}
