use std::net::SocketAddr;
use std::str::FromStr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use delay_server::delay::DelayService;
use delay_server::opendata::{OpenDataClient, OpenDataConfig};
use delay_server::sbb::{SbbClient, SbbConfig};
use delay_server::web::{AppState, create_router};

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default provider request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Read an environment variable, falling back to `default` when it is unset
/// or does not parse.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "ignoring unparsable environment variable");
            default
        }),
        Err(_) => default,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("delay_server=info,tower_http=info")),
        )
        .init();

    let timeout = env_or("PROVIDER_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);

    // Station board client
    let mut sbb_config = SbbConfig::new().with_timeout(timeout);
    if let Ok(url) = std::env::var("SBB_BASE_URL") {
        sbb_config = sbb_config.with_base_url(url);
    }
    let sbb = SbbClient::new(sbb_config).expect("Failed to create station board client");

    // Connections client
    let mut opendata_config = OpenDataConfig::new().with_timeout(timeout);
    if let Ok(url) = std::env::var("OPENDATA_BASE_URL") {
        opendata_config = opendata_config.with_base_url(url);
    }
    let opendata =
        OpenDataClient::new(opendata_config).expect("Failed to create connections client");

    let state = AppState::new(DelayService::new(sbb, opendata));
    let app = create_router(state);

    let default_addr = SocketAddr::from_str(DEFAULT_BIND_ADDR).expect("valid default address");
    let addr = env_or("BIND_ADDR", default_addr);

    info!(%addr, "delay server listening");
    info!("  GET /health          - Health check");
    info!("  GET /delay/sbb       - Next 10 departures (station board)");
    info!("  GET /delay/opendata  - Next departure delay summary");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
