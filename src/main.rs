//! Room booking service — CLI server
//!
//! ```sh
//! # Run with default config (~/.config/room-booking/config.toml)
//! room-booking
//!
//! # Custom config path and port
//! room-booking --config /etc/room-booking/config.toml --port 8080
//!
//! # Validate config without starting
//! room-booking --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use room_booking::config::AppConfig;
use room_booking::server::{init_tracing, run};
use room_booking::support::{install_signal_listener, ShutdownSignal};

#[derive(Parser, Debug)]
#[command(
    name = "room-booking",
    version,
    about = "REST API for booking rooms in hour-aligned slots"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "ROOM_BOOKING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(room_booking::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);

    if let Some(e) = load_error {
        if cli.check {
            return Err(e.into());
        }
        error!("Failed to load config from {}: {}", config_path.display(), e);
        error!("Using default configuration.");
    } else {
        info!("Configuration loaded from {}", config_path.display());
    }

    if let Some(host) = cli.host {
        info!("CLI override: host = {}", host);
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    if cli.check {
        config.validate()?;
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Rooms       : {}", config.booking.rooms.join(", "));
        println!("   Max length  : {}h", config.booking.max_duration_hours);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    let shutdown = ShutdownSignal::new();
    install_signal_listener(shutdown.clone());

    info!("🚀 Starting room booking service. Press Ctrl+C to shutdown gracefully.");
    run(config, shutdown).await?;

    info!("👋 Room booking service shutdown complete");
    Ok(())
}
