// src/main.rs
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use kejani_core::application::ports::{
    document_store::{DocumentStore, DualDocumentStore},
    security::TokenVerifier,
    store::WorkflowStore,
    time::Clock,
};
use kejani_core::application::services::ApplicationServices;
use kejani_core::config::AppConfig;
use kejani_core::domain::{
    payment::PaymentRepository, property::PropertyRepository, tenancy::TenantApplicationRepository,
};
use kejani_core::infrastructure::{
    database,
    repositories::{
        PostgresPaymentRepository, PostgresPropertyRepository,
        PostgresTenantApplicationRepository, PostgresWorkflowStore,
    },
    security::JwtTokenVerifier,
    storage::{CloudinaryStore, UploadcareStore},
    time::SystemClock,
};
use kejani_core::presentation::http::{routes::build_router, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let store: Arc<dyn WorkflowStore> = Arc::new(PostgresWorkflowStore::new(pool.clone()));
    let application_repo: Arc<dyn TenantApplicationRepository> =
        Arc::new(PostgresTenantApplicationRepository::new(pool.clone()));
    let property_repo: Arc<dyn PropertyRepository> =
        Arc::new(PostgresPropertyRepository::new(pool.clone()));
    let payment_repo: Arc<dyn PaymentRepository> =
        Arc::new(PostgresPaymentRepository::new(pool.clone()));

    let http_client = reqwest::Client::new();
    let kyc_store: Arc<dyn DocumentStore> = Arc::new(CloudinaryStore::new(
        http_client.clone(),
        config.cloudinary_cloud_name(),
        config.cloudinary_upload_preset(),
        "tenant_kyc",
    ));
    // Uploadcare serves agreements as the primary CDN; Cloudinary keeps the
    // backup copy.
    let agreement_primary: Arc<dyn DocumentStore> = Arc::new(UploadcareStore::new(
        http_client.clone(),
        config.uploadcare_public_key(),
    ));
    let agreement_backup: Arc<dyn DocumentStore> = Arc::new(CloudinaryStore::new(
        http_client,
        config.cloudinary_cloud_name(),
        config.cloudinary_upload_preset(),
        "tenant_agreements",
    ));
    let agreement_store = DualDocumentStore::new(agreement_primary, agreement_backup);

    let token_verifier: Arc<dyn TokenVerifier> =
        Arc::new(JwtTokenVerifier::new(config.jwt_secret()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        store,
        application_repo,
        property_repo,
        payment_repo,
        kyc_store,
        agreement_store,
        token_verifier,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
