//! Payroll engine HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

/// Malaysian statutory payroll engine API server
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Directory holding schedule.yaml and policy.yaml
    #[clap(short, long, env = "PAYROLL_CONFIG", default_value = "./config/payroll")]
    config: PathBuf,

    /// Listening address
    #[clap(short, long, env = "PAYROLL_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("payroll_engine=info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = ConfigLoader::load(&args.config)?;
    info!(
        path = %args.config.display(),
        schedule = %config.schedule().code,
        version = %config.schedule().version,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(args.bind).await?;
    info!("Listening on {}", args.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
