//! Convoca Web Server
//!
//! Run with: cargo run -p convoca-web

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = convoca_common::Config::from_env();
    info!(endpoint = %config.graphql_endpoint, "Starting Convoca web server");

    let bind_addr = config.bind_addr.clone();
    let state = convoca_web::state::AppState::new(config)?;
    let app = convoca_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Server listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
