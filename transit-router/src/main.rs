use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_router::config::ServerConfig;
use transit_router::network::Dataset;
use transit_router::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Load the network once; it is never mutated afterwards
    info!(path = %config.dataset_path.display(), "loading dataset");
    let network = match Dataset::load(&config.dataset_path).and_then(Dataset::into_network) {
        Ok(network) => network,
        Err(e) => {
            error!(error = %e, "failed to load dataset");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(network);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.addr, "transit router listening");
    info!("  GET /health");
    info!("  GET /api/lines");
    info!("  GET /api/lines/:line_id");
    info!("  GET /api/interchanges");
    info!("  GET /api/route?origin_line=&origin_station=&dest_line=&dest_station=");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
