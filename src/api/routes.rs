use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    certificates::{create_certificate, fetch_certificate, remove_certificate},
    health::health_check,
};
use crate::api::types::ApiState;
use crate::store::CertStore;

/// Create router with all API routes
pub fn create_router(store: Arc<dyn CertStore>) -> Router {
    let state = ApiState { store };

    Router::new()
        .route("/health", get(health_check))
        .route("/certificates", post(create_certificate))
        .route(
            "/certificates/:serial",
            get(fetch_certificate).delete(remove_certificate),
        )
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
