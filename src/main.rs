//! Admin file server - Entry Point
//!
//! Serves configuration artifacts over a guarded administrative surface.

use log::info;

use admin_files::Server;
use admin_files::config::ServerConfig;
use admin_files::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = ServerConfig::load()?;
    info!("Launching admin file server...");

    let server = Server::new(config).await?;
    server.start().await;

    Ok(())
}
