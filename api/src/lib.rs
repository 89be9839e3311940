//! Local REST surface over the backend cats API.
//!
//! # Overview
//! Exposes `/api/cats[/{id}]` and forwards every inbound call to exactly one
//! `cat_core::CatService` operation. Failures are rendered as
//! `ErrorResponse` bodies: a missing cat is a 404, anything else a 500.

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use std::sync::Arc;

use axum::{routing::get, Router};
use cat_core::CatService;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ErrorResponse, RouteError};

pub fn app(service: CatService) -> Router {
    Router::new()
        .route("/api/cats", get(routes::list_cats).post(routes::create_cat))
        .route(
            "/api/cats/{id}",
            get(routes::get_cat).put(routes::update_cat).delete(routes::delete_cat),
        )
        .fallback(routes::fallback)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(service))
}
