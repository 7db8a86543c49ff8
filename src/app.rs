use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue},
    Router,
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::routes::{api_routes, page_routes, static_routes};
use crate::state::AppState;

/// Build the complete Axum application:
/// - /         (full page)
/// - /api      (fragment routes, run through the pipeline)
/// - /static   (assets compiled into the binary)
pub fn build_app(state: AppState) -> Router {
    Router::new()
        // /
        .merge(page_routes::routes(state.clone()).layer(html_content_type()))

        // /api/*
        .nest("/api", api_routes::routes(state).layer(html_content_type()))

        // /static/*
        .nest("/static", static_routes::routes())

        // Request IDs, logging, compression
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request<Body>| {
                            let request_id = request
                                .headers()
                                .get("x-request-id")
                                .and_then(|v| v.to_str().ok())
                                .unwrap_or("-");

                            tracing::info_span!(
                                "request",
                                method = %request.method(),
                                uri = %request.uri(),
                                request_id = %request_id
                            )
                        })
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CompressionLayer::new()),
        )
}

/// Forces `text/html` on every response of the wrapped routes, whatever the
/// handler set.
fn html_content_type() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    )
}
