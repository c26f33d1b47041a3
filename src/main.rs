use premium_server::config::Config;
use premium_server::db::{create_pool, run_migrations, SqliteQuoteStore};
use premium_server::http::{create_router, AppState};
use premium_server::services::{QuoteService, ReferenceDataStatus, RegionLoader};
use std::sync::Arc;
use std::time::SystemTime;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // Logging setup
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},premium_server=debug", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Premium server starting...");
    tracing::info!("   HTTP Addr: {}", config.http_addr);
    tracing::info!("   Database: {}", config.database_url);
    tracing::info!("   Region data: {}", config.region_data_path);

    let db_pool = create_pool(&config.database_url, config.db_max_connections).await?;
    tracing::info!("✅ Database connected");

    run_migrations(&db_pool).await?;
    tracing::info!("✅ Migrations applied");

    // Reference data goes in before the listener opens. A failed import is
    // reported through /health; quotes keep working without it.
    let reference_data = if config.load_regions_on_startup {
        let loader = RegionLoader::new(db_pool.clone(), config.region_batch_size);
        let result = loader.load_file(&config.region_data_path).await;
        if let Err(e) = &result {
            tracing::error!("❌ Region reference import failed: {}", e);
        }
        ReferenceDataStatus::from(&result)
    } else {
        tracing::info!("⏸️ Region reference import disabled");
        ReferenceDataStatus::Disabled
    };

    let quotes = Arc::new(QuoteService::new(Arc::new(SqliteQuoteStore::new(
        db_pool.clone(),
    ))));

    let state = AppState {
        quotes,
        db_pool,
        reference_data,
        start_time: SystemTime::now(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!("🌐 Listening on http://{}", config.http_addr);
    tracing::info!("📋 Endpoints:");
    tracing::info!("   GET    /health");
    tracing::info!("   GET    /metrics");
    tracing::info!("   POST   /insurance/calculate");
    tracing::info!("   GET    /insurance");
    tracing::info!("   GET    /insurance/:id");
    tracing::info!("   PUT    /insurance/:id");
    tracing::info!("   DELETE /insurance/:id");
    tracing::info!("   GET    /insurance/regions/:postal_code");

    axum::serve(listener, app).await?;

    Ok(())
}
