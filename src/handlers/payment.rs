use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::{NewPayment, PaymentId};
use crate::routes::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Debug, Serialize)]
pub struct PaymentCreated {
    #[serde(rename = "paymentID")]
    pub payment_id: PaymentId,
}

#[derive(Debug, Serialize)]
pub struct CallbackRecorded {
    pub message: &'static str,
}

/// Query parameters of a payment callback. Both arrive as raw strings so a
/// bad id is reported as a parse failure rather than a generic rejection.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: String,
}

/// `POST /payments`
pub async fn create_payment(
    State(state): State<AppState>,
    payload: Result<Json<NewPayment>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payment) = payload.map_err(|rejection| AppError::DecodeError(rejection.body_text()))?;

    let payment_id = state.payments.create(&payment).await?;

    Ok(created(PaymentCreated { payment_id }, "Payment created"))
}

/// `POST /payments/callback?id=<int>&status=<string>`
pub async fn payment_callback(
    State(state): State<AppState>,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::ParseError(rejection.body_text()))?;

    let id: PaymentId = params
        .id
        .parse()
        .map_err(|e| AppError::ParseError(format!("Invalid payment id '{}': {}", params.id, e)))?;

    state.payments.record_callback(id, &params.status).await?;

    Ok(success(
        CallbackRecorded {
            message: "Payment status updated",
        },
        "Payment callback recorded",
    ))
}
