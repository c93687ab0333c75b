use contact_relay::{AppState, RelayConfig};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match RelayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if config.api_url.is_none() {
        warn!("THIRD_PARTY_API_URL is not set; submissions will fail with 500");
    }
    if config.test_mode {
        info!("test mode enabled; upstream requests are logged, not sent");
    }

    let addr = config.bind_addr;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {addr}");
    contact_relay::run(listener, AppState::from_config(config)).await
}
