//! InfraStory inventory service entry point

use std::net::SocketAddr;

use clap::Parser;
use tracing::info;

use infrastory::{AppState, InventoryServer, ServerError, ServerResult, logging};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "infrastory")]
#[command(about = "Synthetic cloud-inventory demo server")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ServerResult<()> {
    let args = Args::parse();

    logging::init_tracing(&args.log_level);

    let addr: SocketAddr = format!("127.0.0.1:{}", args.port)
        .parse()
        .map_err(|e| ServerError::config(format!("Invalid port: {e}")))?;

    info!("🚀 InfraStory starting on HTTP port {}", args.port);

    let server = InventoryServer::new(AppState::new());
    server.run(addr).await?;

    info!("Server stopped gracefully");
    Ok(())
}
