use std::sync::Arc;
use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    routing::{get, post},
    BoxError, Router,
};
use tower::timeout::error::Elapsed;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_payment, health_check, payment_callback};
use crate::service::PaymentService;
use crate::utils::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub payments: Arc<PaymentService>,
}

impl AppState {
    pub fn new(payments: PaymentService) -> Self {
        Self {
            payments: Arc::new(payments),
        }
    }
}

pub fn create_routes(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/payments", post(create_payment))
        .route("/payments/callback", post(payment_callback))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(request_timeout),
        )
}

/// Turns errors raised by the middleware stack into enveloped responses.
/// The handler future is dropped on timeout, which cancels its store call.
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::Timeout
    } else {
        AppError::InternalServerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::future;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::IntoResponse;
    use rust_decimal::Decimal;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::models::PaymentId;
    use crate::store::{PaymentStore, StoreError};

    /// Never answers.
    struct StalledStore;

    #[async_trait]
    impl PaymentStore for StalledStore {
        async fn create_payment(&self, _: Decimal, _: &str) -> Result<PaymentId, StoreError> {
            future::pending::<Result<PaymentId, StoreError>>().await
        }

        async fn update_payment_status(&self, _: PaymentId, _: &str) -> Result<u64, StoreError> {
            future::pending::<Result<u64, StoreError>>().await
        }
    }

    fn stalled_app() -> Router {
        create_routes(
            AppState::new(PaymentService::new(Arc::new(StalledStore))),
            Duration::from_millis(20),
        )
    }

    #[tokio::test]
    async fn test_slow_request_times_out_inside_envelope() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/payments")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"amount":100.5,"status":"initiated"}"#))
            .unwrap();

        let response = stalled_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "REQUEST_TIMEOUT");
    }

    #[tokio::test]
    async fn test_health_is_unaffected_by_a_stalled_store() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let response = stalled_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_middleware_error_is_internal() {
        let err: BoxError = "boom".into();

        let response = handle_middleware_error(err).await.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
