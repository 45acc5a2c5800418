pub mod api;
pub mod appresult;
pub mod index;
pub mod pages;
pub mod res;
pub mod settings;
pub mod store;
pub mod validate;

use axum::{extract::FromRef, routing::{get, post}, Router};
use tower_http::trace::TraceLayer;

pub use appresult::{AppError, AppResult};
pub use settings::Settings;
pub use store::{Message, MessageStore};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: MessageStore,
}

impl AppState {
    pub fn new(store: MessageStore) -> Self {
        Self { store }
    }

    /// Opens the configured database and makes sure the schema exists.
    pub async fn connect(settings: &Settings) -> anyhow::Result<Self> {
        let store = MessageStore::connect(&settings.database_url, settings.db_max_connections).await?;
        store.init_schema().await?;
        Ok(Self::new(store))
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index).post(index::submit))
        .route("/api/messages", post(api::add_message))
        .route("/health", get(pages::health))
        .route("/about", get(pages::about))

        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub fn init_logging(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_max_level(settings.level)
        .with_level(true)
        .compact()
        .init();
}
