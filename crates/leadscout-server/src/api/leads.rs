//! The two lead-discovery endpoints.
//!
//! Both accept a JSON body where every field is optional; missing fields get
//! the documented defaults. Provider rejections come back as an
//! `{error, message, businesses|stores: []}` body rather than an HTTP error,
//! so browser callers always get a parseable result.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use leadscout_pipeline::{Lead, LeadFlow, LeadRequest, PipelineError};

use crate::middleware::RequestId;

use super::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NoWebsiteParams {
    #[serde(default = "default_no_website_location")]
    location: String,
    #[serde(default = "default_industry")]
    industry: String,
    #[serde(default = "default_max_results")]
    max_results: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NoEcommerceParams {
    #[serde(default = "default_no_ecommerce_location")]
    location: String,
    #[serde(default = "default_store_type")]
    store_type: String,
    #[serde(default = "default_max_results")]
    max_results: usize,
}

fn default_no_website_location() -> String {
    "Austin, TX".to_string()
}

fn default_industry() -> String {
    "restaurants".to_string()
}

fn default_no_ecommerce_location() -> String {
    "Denver, CO".to_string()
}

fn default_store_type() -> String {
    "boutique".to_string()
}

fn default_max_results() -> usize {
    15
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NoWebsiteResponse {
    query: String,
    location: String,
    industry: String,
    total_found: usize,
    businesses: Vec<Lead>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NoEcommerceResponse {
    query: String,
    location: String,
    store_type: String,
    total_found: usize,
    stores: Vec<Lead>,
}

pub(super) async fn find_no_website(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(params): Json<NoWebsiteParams>,
) -> Response {
    let request = LeadRequest {
        location: params.location.clone(),
        subject: params.industry.clone(),
        max_results: params.max_results,
    };

    match state.pipeline.find_leads(LeadFlow::NoWebsite, &request).await {
        Ok(report) => Json(NoWebsiteResponse {
            query: report.query,
            location: params.location,
            industry: params.industry,
            total_found: report.leads.len(),
            businesses: report.leads,
        })
        .into_response(),
        Err(e) => error_response(&req_id, &e, "businesses"),
    }
}

pub(super) async fn find_no_ecommerce(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(params): Json<NoEcommerceParams>,
) -> Response {
    let request = LeadRequest {
        location: params.location.clone(),
        subject: params.store_type.clone(),
        max_results: params.max_results,
    };

    match state
        .pipeline
        .find_leads(LeadFlow::NoEcommerce, &request)
        .await
    {
        Ok(report) => Json(NoEcommerceResponse {
            query: report.query,
            location: params.location,
            store_type: params.store_type,
            total_found: report.leads.len(),
            stores: report.leads,
        })
        .into_response(),
        Err(e) => error_response(&req_id, &e, "stores"),
    }
}

/// Builds the flow error shape with the flow's list key.
///
/// Provider rejections are the expected failure mode and come back as 200
/// with the provider's own status string; anything else is a gateway-level
/// failure with a synthetic status.
fn error_response(req_id: &RequestId, err: &PipelineError, list_key: &str) -> Response {
    let (http_status, error, message) = match err {
        PipelineError::Provider { status, message } => (
            StatusCode::OK,
            status.clone(),
            message.clone().unwrap_or_else(|| "Search failed".to_string()),
        ),
        other => {
            tracing::warn!(
                request_id = %req_id.0,
                error = %other,
                "lead search failed at the transport level"
            );
            (
                StatusCode::BAD_GATEWAY,
                "REQUEST_FAILED".to_string(),
                other.to_string(),
            )
        }
    };

    let mut body = serde_json::Map::new();
    body.insert("error".to_string(), serde_json::Value::String(error));
    body.insert("message".to_string(), serde_json::Value::String(message));
    body.insert(list_key.to_string(), serde_json::Value::Array(Vec::new()));
    (http_status, Json(serde_json::Value::Object(body))).into_response()
}
