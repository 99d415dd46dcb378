use std::sync::Arc;

use anyhow::Result;

use doubtbot_backend::config::AppConfig;
use doubtbot_backend::routes;
use doubtbot_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, every question will get the misconfiguration reply");
    }

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config));

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("doubt bot listening on http://{bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
