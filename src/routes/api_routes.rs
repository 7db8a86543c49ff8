use axum::{extract::State, response::Response, routing::post, Router};

use crate::errors::AppError;
use crate::pipeline::{FormFields, RequestContext};
use crate::render::{BoxFragment, CreationForm, ItemList};
use crate::services::item_service;
use crate::state::item::Item;
use crate::state::AppState;

/// Build all routes under /api. Each one runs through `AppState::pipeline`.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/increment", post(increment))
        .route("/error", post(fail))
        .route("/create", post(create_item))
        .route("/delete", post(delete_item))
        .with_state(state)
}

//
// ─────────────────────────────────────────────────────────────
// POST /api/increment
// Nothing but the pipeline's own fragments
// ─────────────────────────────────────────────────────────────
//
async fn increment(State(state): State<AppState>, form: FormFields) -> Response {
    state.pipeline.respond(form, |_| Ok(Vec::new()))
}

//
// ─────────────────────────────────────────────────────────────
// POST /api/error
// Always fails, to exercise the error fragment
// ─────────────────────────────────────────────────────────────
//
async fn fail(State(state): State<AppState>, form: FormFields) -> Response {
    state.pipeline.respond(form, |ctx: &mut RequestContext| {
        Err(AppError::Failure(format!(
            "oops from request {}",
            ctx.view_state.request_count
        )))
    })
}

//
// ─────────────────────────────────────────────────────────────
// POST /api/create
// Validate, insert, re-list; reset the creation form
// ─────────────────────────────────────────────────────────────
//
async fn create_item(State(state): State<AppState>, form: FormFields) -> Response {
    state.pipeline.respond(form, |ctx: &mut RequestContext| {
        let item = Item::from_form(&ctx.form);
        let message = item.message.clone();

        let items = item_service::create(&state.store, item)?;
        tracing::info!("Created item ({} total)", items.len());

        let fragments: Vec<BoxFragment> = vec![
            Box::new(ItemList::new(items)),
            Box::new(CreationForm::after_create(message)),
        ];
        Ok(fragments)
    })
}

//
// ─────────────────────────────────────────────────────────────
// POST /api/delete
// Remove an item if present; re-list
// ─────────────────────────────────────────────────────────────
//
async fn delete_item(State(state): State<AppState>, form: FormFields) -> Response {
    state.pipeline.respond(form, |ctx: &mut RequestContext| {
        let items = item_service::delete(&state.store, ctx.form.value("id"))?;

        let fragments: Vec<BoxFragment> = vec![Box::new(ItemList::new(items))];
        Ok(fragments)
    })
}
