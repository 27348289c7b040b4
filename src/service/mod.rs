use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::{NewPayment, PaymentId};
use crate::store::{PaymentStore, StoreError};

/// Passes payment requests through to the store without altering them.
#[derive(Clone)]
pub struct PaymentService {
    store: Arc<dyn PaymentStore>,
}

impl PaymentService {
    pub fn new(store: Arc<dyn PaymentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payment: &NewPayment) -> Result<PaymentId, StoreError> {
        let id = self
            .store
            .create_payment(payment.amount, &payment.status)
            .await?;

        debug!(payment_id = %id, status = %payment.status, "Payment created");
        Ok(id)
    }

    /// Records a status reported by a payment callback.
    ///
    /// A callback for an unknown id succeeds; it only shows up in the logs.
    pub async fn record_callback(&self, id: PaymentId, status: &str) -> Result<(), StoreError> {
        let rows = self.store.update_payment_status(id, status).await?;

        if rows == 0 {
            warn!(payment_id = %id, status, "Payment callback matched no payment");
        } else {
            debug!(payment_id = %id, status, rows, "Payment status updated");
        }

        Ok(())
    }
}
