//! EventHub
//!
//! Main application entry point

use tracing::info;

use eventhub::{
    config::Settings,
    database::{self, PoolConfig},
    handlers::{self, AppState},
    middleware::AuthKeys,
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file appender on shutdown
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", eventhub::info());

    // Initialize database connection
    info!("Connecting to database...");
    let pool_config = PoolConfig::from_settings(&settings.database);
    let pool = database::create_pool(&pool_config).await?;

    // Run database migrations
    database::run_migrations(&pool).await?;

    // Wire services and the router
    let services = ServiceFactory::new(pool.clone(), &settings);
    let auth = AuthKeys::new(&settings.auth.jwt_secret);
    let state = AppState::new(services, auth, pool);
    let app = handlers::router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on {addr}");

    axum::serve(listener, app).await?;

    info!("EventHub has been shut down.");

    Ok(())
}
