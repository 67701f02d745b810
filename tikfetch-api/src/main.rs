use anyhow::Result;
use clap::Parser;
use tikfetch_api::http;
use tikfetch_core::{
    bootstrap::{init_services, load_config},
    logging,
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// TikTok download link service
#[derive(Debug, Parser)]
#[command(name = "tikfetch", version, about)]
struct Cli {
    /// Path to a config file (YAML, TOML or JSON)
    #[arg(short, long, env = "TIKFETCH_CONFIG_PATH")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load and validate configuration
    let config = load_config(cli.config.as_deref())?;

    // 2. Initialize logging
    logging::init_logging(&config.logging)?;

    // 3. Build upstream clients and services
    let services = init_services(&config)?;
    let router = http::create_router(services, &config.server.static_dir);

    // 4. Serve until Ctrl+C / SIGTERM
    let http_address = config.http_address();
    let listener = TcpListener::bind(&http_address).await.map_err(|e| {
        error!("Failed to bind HTTP address {}: {}", http_address, e);
        anyhow::anyhow!("Failed to bind {http_address}: {e}")
    })?;

    info!("Server running on port {}", config.server.port);
    info!("Open http://localhost:{} in your browser", config.server.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves once the process is asked to stop. A signal whose handler
/// cannot be installed is ignored.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };
    info!(signal, "Shutting down, waiting for in-flight requests");
}
