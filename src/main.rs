use std::net::SocketAddr;

use guestbook::{AppState, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load_from_env()?;
    guestbook::init_logging(&settings);

    let app_state = AppState::connect(&settings).await?;
    let messages = app_state.store.count().await?;
    info!(database_url = %settings.database_url, messages, "guestbook store ready");

    let app = guestbook::router(app_state);

    let addr = SocketAddr::new(settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
