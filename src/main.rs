use dotenvy::dotenv;
use gearshop::{
    config, core,
    errors::Result,
    session::SessionStore,
    web::{self, AppState},
};
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Address the HTTP server binds to unless `BIND_ADDR` overrides it.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database tables ready."))
        .inspect_err(|e| error!("Failed to create database tables: {}", e))?;

    // 4. Seed the catalog from config.toml, if present
    match config::catalog::load_default_config() {
        Ok(catalog_config) => {
            core::catalog::seed_catalog(&db, &catalog_config)
                .await
                .inspect(|_| info!("Catalog seeded successfully."))
                .inspect_err(|e| error!("Failed to seed catalog: {}", e))?;
        }
        Err(e) => {
            warn!("No catalog config loaded, skipping seed: {}", e);
        }
    }

    // 5. Select the payment gateway from credentials in the environment
    let payment_gateway = config::gateway::select_gateway();

    // 6. Build the application state and router
    let state = AppState {
        db,
        sessions: SessionStore::new(),
        gateway: payment_gateway,
    };
    let app = web::build_app(state);

    // 7. Serve HTTP
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .inspect(|_| info!("Listening on {}", bind_addr))
        .inspect_err(|e| error!("Failed to bind {}: {}", bind_addr, e))?;
    axum::serve(listener, app).await?;

    Ok(())
}
