pub mod carbon;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod ui;

pub const STATIC_HASH: &str = env!("STATIC_HASH");

use std::path::Path;
use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::carbon::CarbonSource;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub carbon: Arc<dyn CarbonSource>,
}

impl AppState {
    pub fn new(store: impl RecordStore, carbon: impl CarbonSource) -> Self {
        Self {
            store: Arc::new(store),
            carbon: Arc::new(carbon),
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn method_not_allowed() -> error::AppError {
    error::AppError::MethodNotAllowed
}

/// Build the full Axum application router.
///
/// Assets are served from `static_dir` under `/static`; every other path
/// that is not an API route falls through to the checker page.
pub fn build_app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::data::router())
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=86400"),
                ))
                .service(ServeDir::new(static_dir.as_ref())),
        )
        .fallback(routes::app::shell)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
