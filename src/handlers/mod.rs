use axum::response::Response;
use serde::Serialize;

use crate::utils::response::success;

pub mod payment;

pub use payment::{create_payment, payment_callback};

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
}

pub async fn health_check() -> Response {
    success(HealthPayload { status: "UP" }, "Health check successful")
}
