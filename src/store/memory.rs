use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use super::{PaymentStore, StoreError};
use crate::models::{Payment, PaymentId};

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<PaymentId, Payment>,
    calls: usize,
}

/// Keeps payments in a map. Ids start at 1 and increase like a sequence.
#[derive(Debug, Default)]
pub struct InMemoryPaymentStore {
    table: Mutex<Table>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: PaymentId) -> Option<Payment> {
        self.table().rows.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.table().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of store operations issued so far.
    pub fn calls(&self) -> usize {
        self.table().calls
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn create_payment(&self, amount: Decimal, status: &str) -> Result<PaymentId, StoreError> {
        let mut table = self.table();
        table.calls += 1;
        table.last_id += 1;

        let id = PaymentId(table.last_id);
        let now = Utc::now();
        table.rows.insert(
            id,
            Payment {
                id,
                amount,
                status: status.to_string(),
                created_at: now,
                updated_at: now,
            },
        );

        Ok(id)
    }

    async fn update_payment_status(&self, id: PaymentId, status: &str) -> Result<u64, StoreError> {
        let mut table = self.table();
        table.calls += 1;

        match table.rows.get_mut(&id) {
            Some(payment) => {
                payment.status = status.to_string();
                payment.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
