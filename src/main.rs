use tracing::{info, warn};

use commerce_services::{build_router, db, Config, StoreBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("info,commerce_services=debug")
                }),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    info!(service = %config.service, "Starting commerce service");

    let backend = match (&config.database_url, config.service.uses_store()) {
        (Some(url), true) => {
            let pool = db::connect(&config, url).await?;
            db::migrate(&pool, config.service).await?;
            StoreBackend::Postgres(pool)
        }
        (None, true) => {
            warn!("DATABASE_URL not set; rows are kept in memory and lost on exit.");
            StoreBackend::Memory
        }
        (_, false) => StoreBackend::Memory,
    };
    info!(backend = backend.name(), "Store ready");

    let app = build_router(config.service, &backend);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
