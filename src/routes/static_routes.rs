use axum::{http::header, response::IntoResponse, routing::get, Router};

/// Page script, compiled into the binary so it is served whatever the
/// working directory.
const APP_JS: &str = include_str!("../../static/app.js");

pub fn routes() -> Router {
    Router::new().route("/app.js", get(app_js))
}

/// GET /static/app.js
async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        APP_JS,
    )
}
