use axum::{debug_handler, extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{store::MessageStore, validate::validate, AppResult};

#[derive(Debug, Deserialize)]
pub(crate) struct NewMessageBody {
    name: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// Body of every `/api/messages` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiReply {
    pub status: ApiStatus,
    pub message: String,
}

impl ApiReply {
    fn json(status: ApiStatus, message: impl Into<String>) -> Json<Self> {
        Json(Self { status, message: message.into() })
    }
}

#[debug_handler]
pub(crate) async fn add_message(
    State(store): State<MessageStore>,
    Json(NewMessageBody { name, message }): Json<NewMessageBody>,
) -> AppResult<(StatusCode, Json<ApiReply>)> {
    let new = match validate(name.as_deref(), message.as_deref()) {
        Ok(new) => new,
        Err(err) => {
            debug!(%err, "api submission rejected");
            return Ok((StatusCode::BAD_REQUEST, ApiReply::json(ApiStatus::Error, err.to_string())));
        }
    };

    let mut tx = store.begin().await?;
    let id = tx.insert(new.name, new.message).await?;
    tx.commit().await?;
    info!(id, "message added from api");

    Ok((StatusCode::OK, ApiReply::json(ApiStatus::Success, "Message added!")))
}
