use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

mod routes;
mod state;

use counter::{ResultCache, Settings};
use slack::SlackClient;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .init();

    let settings = Settings::from_env()?;

    let slack = SlackClient::new(settings.slack_bot_token.clone())?;
    let cache = ResultCache::new(
        Duration::from_secs(settings.cache_ttl_secs),
        settings.period_days,
    );

    let state = AppState {
        slack: Arc::new(slack),
        cache: Arc::new(cache),
    };

    let app = routes::router(state);

    let addr: SocketAddr = settings.api_bind.parse()?;
    info!(%addr, "starting api");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
