//! PedalPost backend server entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use pedalpost::adapters::auth::JwtTokenVerifier;
use pedalpost::adapters::http::{api_router, AppState};
use pedalpost::adapters::postgres::{
    PostgresListingRepository, PostgresPaymentRecordRepository, PostgresWebhookEventRepository,
};
use pedalpost::adapters::storage::LocalImageStorage;
use pedalpost::adapters::stripe::{StripeConfig, StripePaymentGateway};
use pedalpost::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "starting pedalpost backend"
    );

    // Database pool
    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Adapters
    let stripe_config = StripeConfig::new(
        config.payment.stripe_api_key.clone(),
        config.payment.stripe_webhook_secret.clone(),
    );

    let state = AppState {
        listings: Arc::new(PostgresListingRepository::new(pool.clone())),
        payment_provider: Arc::new(StripePaymentGateway::new(stripe_config)),
        webhook_events: Arc::new(PostgresWebhookEventRepository::new(pool.clone())),
        payment_records: Arc::new(PostgresPaymentRecordRepository::new(pool)),
        image_storage: Arc::new(LocalImageStorage::new(
            &config.storage.upload_dir,
            config.storage.public_base_path.clone(),
        )),
        token_verifier: Arc::new(JwtTokenVerifier::new(&config.auth.jwt_secret)),
        public_site_url: config.payment.public_site_url.clone(),
    };

    let cors = build_cors_layer(&config);

    let app = Router::new()
        .nest("/api", api_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins
            .iter()
            .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
