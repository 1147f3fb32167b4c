//! HTTP API wiring (axum router over the storefront engine).
//!
//! - `routes.rs`: handlers, one per endpoint
//! - `dto.rs`: request bodies
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Extension, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::application::engine::StorefrontEngine;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(engine: Arc<StorefrontEngine>) -> Router {
    let api = Router::new()
        .route("/products", get(routes::list_products))
        .route("/products/:id", get(routes::get_product))
        .route("/cart", get(routes::get_cart).post(routes::add_to_cart))
        .route("/cart/:id", delete(routes::remove_from_cart))
        .route("/checkout", post(routes::checkout));

    Router::new()
        .route("/health", get(routes::health))
        .nest("/api", api)
        .layer(Extension(engine))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
