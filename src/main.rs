use std::sync::Arc;

use dotenvy::dotenv;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use payment_service::config::Config;
use payment_service::db;
use payment_service::routes::{create_routes, AppState};
use payment_service::service::PaymentService;
use payment_service::store::PgPaymentStore;

const DEFAULT_LOG_FILTER: &str = "payment_service=info,tower_http=info";

#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(e) = run(Config::from_env()).await {
        tracing::error!(error = %e, "Payment service stopped");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), StartupError> {
    let pool = db::connect(&config).await?;
    tracing::info!("Successfully connected to database");

    db::run_migrations(&pool).await?;
    tracing::info!("Migrations run successfully");

    let store = Arc::new(PgPaymentStore::new(pool));
    let state = AppState::new(PaymentService::new(store));
    let app = create_routes(state, config.request_timeout);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
