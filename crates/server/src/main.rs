use std::sync::Arc;

use flowgate_server::config::ServerConfig;
use flowgate_server::remote::{ConfigClient, HttpConfigClient, InMemoryConfigClient};
use flowgate_server::rest::{self, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServerConfig::from_env();

    let client: Arc<dyn ConfigClient> = match &config.config_store_url {
        Some(url) => {
            tracing::info!(%url, "using external config store");
            Arc::new(HttpConfigClient::new(url))
        }
        None => {
            tracing::warn!("no config store configured, rules stay in-process");
            Arc::new(InMemoryConfigClient::new())
        }
    };

    let app = rest::router(AppState::new(client));
    let rest_addr = config.rest_addr;

    tracing::info!(%rest_addr, "rule console starting");
    let listener = tokio::net::TcpListener::bind(rest_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
