use search_server::{AppState, RecordStore, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "search_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().inspect_err(|err| {
        tracing::error!(error = %err, "configuration error");
    })?;
    let store = RecordStore::load(&config.dataset).inspect_err(|err| {
        tracing::error!(error = %err, "failed to load dataset");
    })?;

    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, records = store.len(), "listening");
    search_server::run(listener, AppState::new(config.access_token, store)).await?;
    Ok(())
}
