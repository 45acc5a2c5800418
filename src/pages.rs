use axum::{debug_handler, http::StatusCode};

#[debug_handler]
pub(crate) async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Server is running!")
}

#[debug_handler]
pub(crate) async fn about() -> &'static str {
    "This is a simple guestbook application."
}
