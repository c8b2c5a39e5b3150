//! Server runtime
//!
//! Wires configuration into the booking service and the HTTP router, and
//! runs the listener until shutdown is signalled.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::application::BookingService;
use crate::config::{AppConfig, LoggingConfig};
use crate::interfaces::http::create_api_router;
use crate::support::shutdown::ShutdownSignal;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("Server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Fresh booking service seeded from configuration.
pub fn build_service(config: &AppConfig) -> Arc<BookingService> {
    let registry = config.booking.registry();
    let policy = config.booking.policy();
    info!(
        rooms = ?registry.rooms(),
        max_duration_hours = policy.max_hours(),
        "Booking service initialised"
    );
    Arc::new(BookingService::with_system_clock(registry, policy))
}

/// Serve the API until `shutdown` fires, then give in-flight requests up to
/// `server.shutdown_timeout` seconds to finish.
pub async fn run(config: AppConfig, shutdown: ShutdownSignal) -> Result<(), ServerError> {
    let service = build_service(&config);
    let router = create_api_router(service, &config.cors);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    let graceful = shutdown.clone();
    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        graceful.wait().await;
        info!("🛑 REST API server received shutdown signal");
    });

    let mut task = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut task => {
            return result?.map_err(ServerError::from);
        }
        _ = shutdown.wait() => {}
    }

    let timeout = Duration::from_secs(config.server.shutdown_timeout);
    info!("⏳ Starting graceful shutdown (timeout: {}s)...", timeout.as_secs());

    match tokio::time::timeout(timeout, task).await {
        Ok(result) => {
            result?.map_err(ServerError::from)?;
            info!("✅ Graceful shutdown completed");
            Ok(())
        }
        Err(_) => {
            warn!("⚠️ Graceful shutdown timed out after {}s", timeout.as_secs());
            Ok(())
        }
    }
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init_tracing(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    let result = match config.format.to_lowercase().as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init(),
    };

    if let Err(e) = result {
        error!("Tracing already initialised: {}", e);
    }
}
