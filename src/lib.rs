//! Item Board
//!
//! A small server-rendered CRUD service. Forms post to `/api/*`; each
//! response is a sequence of HTML fragments that the page script swaps into
//! place by element id.
//!
//! ## Modules
//! - **`state`**: the generic in-memory record store and the shared `AppState`.
//! - **`pipeline`**: the `/api` stage chain and the client-held view-state codec.
//! - **`render`**: HTML fragments and the ordered, fail-fast fragment writer.
//! - **`services`** / **`validation`**: what the create and delete routes do.
//! - **`routes`** / **`app`**: axum routers and the middleware stack.

pub mod app;
pub mod config;
pub mod errors;
pub mod pipeline;
pub mod render;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;
