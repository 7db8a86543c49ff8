use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::render::{Fragment, Page};
use crate::services::item_service;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .with_state(state)
}

//
// ─────────────────────────────────────────────────────────────
// GET /
// Full page with the current listing and a fresh view state
// ─────────────────────────────────────────────────────────────
//
async fn index(State(state): State<AppState>) -> Response {
    let page = Page::new(item_service::list(&state.store), "");

    let mut body = Vec::new();
    match page.render(&mut body) {
        Ok(()) => (StatusCode::OK, body).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
