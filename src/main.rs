use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iptv_server::{config::Config, services::ChannelStore, web::WebServer};

#[derive(Parser)]
#[command(name = "iptv-server")]
#[command(version)]
#[command(about = "IPTV web service with M3U playlist upload, playlist export and EPG data")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Directory served under /static (overrides config file)
    #[arg(short, long, value_name = "DIR")]
    static_dir: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("iptv_server={},tower_http=trace", cli.log_level)
    } else {
        format!("iptv_server={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting IPTV Server v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config.display());

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(static_dir) = cli.static_dir {
        config.storage.static_path = static_dir;
    }

    let channels = if config.channels.seed_sample_channels {
        ChannelStore::with_sample_channels()
    } else {
        ChannelStore::default()
    };
    info!("Channel store initialized with {} channels", channels.len().await);

    let web_server = WebServer::new(config, channels)?;
    info!("Open http://{} in your browser", web_server.addr());
    web_server.serve().await?;

    Ok(())
}
