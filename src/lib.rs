pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::SharedStore;
use crate::state::{AppState, SharedState};

pub fn build_app(store: SharedStore, config: Config) -> Router {
    let max_body_size = config.max_body_size;
    tracing::info!("Contact store backend: {}", store.backend());

    let state: SharedState = Arc::new(AppState { store, config });

    // The portfolio front end may be served from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                // Enforced by the `Bytes` extractor, which answers 413
                .layer(DefaultBodyLimit::max(max_body_size)),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
