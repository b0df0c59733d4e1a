//! Item Service - standalone HTTP server for the item collection.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use item_service_lib::config::ItemServiceConfig;

#[derive(Parser)]
#[command(name = "item-service")]
#[command(about = "Item resource service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind address (falls back to ITEM_SERVICE_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (falls back to ITEM_SERVICE_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ItemServiceConfig::from_env();

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.host);
            let port = port.unwrap_or(config.port);
            item_service_lib::run_embedded(&host, port).await?;
        }
    }

    Ok(())
}
