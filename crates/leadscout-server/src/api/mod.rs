mod leads;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use leadscout_pipeline::LeadPipeline;

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<LeadPipeline>,
}

/// Open CORS: the API is consumed directly from browser frontends on
/// arbitrary origins.
fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/find-no-website", post(leads::find_no_website))
        .route("/api/find-no-ecommerce", post(leads::find_no_ecommerce))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

/// Service descriptor for anyone poking the root URL.
async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "message": "leadscout business finder API",
        "endpoints": {
            "/api/find-no-website": "POST - Find businesses without websites",
            "/api/find-no-ecommerce": "POST - Find retail stores without e-commerce"
        }
    }))
}
