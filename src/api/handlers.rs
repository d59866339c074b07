//! HTTP request handlers for the salary estimation API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{estimate, format_salary};
use crate::error::EngineError;
use crate::models::{CalculationInput, Feedback, NewLead, normalize_email};

use super::request::{CalculationRequest, CheckLeadRequest, FeedbackRequest};
use super::response::{
    ApiError, ApiErrorResponse, AuditTraceResponse, EstimateResponse, LeadCheckResponse,
    LeadCreatedResponse, ReferenceResponse, SuccessResponse,
};
use super::state::AppState;

/// Version reported in every estimate.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/reference", get(reference_handler))
        .route("/leads", post(create_lead_handler))
        .route("/leads/check", post(check_lead_handler))
        .route("/leads/feedback", post(feedback_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the estimate with its audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let input: CalculationInput = match parse_body(payload, correlation_id) {
        Ok(request) => request.into(),
        Err(response) => return response,
    };

    let table = state.table();
    let start_time = Instant::now();
    match estimate(&input, table) {
        Ok(estimate) => {
            let duration = start_time.elapsed();
            let formatted = format_salary(estimate.result.amount, &estimate.result.currency_label);
            info!(
                correlation_id = %correlation_id,
                region = %input.region,
                role = %input.role,
                amount = %estimate.result.amount,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );

            let response = EstimateResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: ENGINE_VERSION.to_string(),
                guide_version: table.guide().version.clone(),
                result: estimate.result,
                formatted,
                audit_trace: AuditTraceResponse {
                    steps: estimate.audit_trace.steps,
                    warnings: estimate.audit_trace.warnings,
                    duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
                },
            };
            json_response(StatusCode::OK, &response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                region = %input.region,
                role = %input.role,
                error = %err,
                "Calculation rejected"
            );
            error_response(err)
        }
    }
}

/// Handler for GET /reference endpoint.
///
/// Lists the regions, roles and sectors of the loaded guide.
async fn reference_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, &ReferenceResponse::from(state.table()))
}

/// Handler for POST /leads/check endpoint.
async fn check_lead_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckLeadRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing lead check");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let email = normalize_email(&request.email);
    if email.is_empty() {
        warn!(correlation_id = %correlation_id, "Lead check without email");
        return error_response(EngineError::invalid_lead("email", "Please enter your email"));
    }

    match state.leads().exists(&email).await {
        Ok(exists) => {
            info!(correlation_id = %correlation_id, exists, "Lead check completed");
            json_response(StatusCode::OK, &LeadCheckResponse { exists, email })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Lead check failed");
            error_response(err)
        }
    }
}

/// Handler for POST /leads endpoint.
///
/// Registers a new lead; duplicates are rejected with 409.
async fn create_lead_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewLead>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing lead registration");

    let new_lead = match parse_body(payload, correlation_id) {
        Ok(new_lead) => new_lead,
        Err(response) => return response,
    };

    match state.leads().create(new_lead).await {
        Ok(lead) => {
            info!(correlation_id = %correlation_id, lead_id = %lead.id, "Lead registered");
            json_response(
                StatusCode::CREATED,
                &LeadCreatedResponse {
                    success: true,
                    id: lead.id,
                },
            )
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Lead registration rejected");
            error_response(err)
        }
    }
}

/// Handler for POST /leads/feedback endpoint.
async fn feedback_handler(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing feedback");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    if request.email.trim().is_empty() {
        warn!(correlation_id = %correlation_id, "Feedback without email");
        return error_response(EngineError::invalid_lead("email", "Please enter your email"));
    }

    let feedback = Feedback {
        rating: request.rating,
        comment: non_blank(request.comment),
        salary_output: non_blank(request.salary_output),
        recorded_at: Utc::now(),
    };

    match state.leads().record_feedback(&request.email, feedback).await {
        Ok(lead) => {
            info!(correlation_id = %correlation_id, lead_id = %lead.id, "Feedback recorded");
            json_response(StatusCode::OK, &SuccessResponse { success: true })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Feedback rejected");
            error_response(err)
        }
    }
}

/// Unwraps a JSON body, turning extractor rejections into 400 responses.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message is in the body text
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(json_response(StatusCode::BAD_REQUEST, &error))
}

fn error_response(err: EngineError) -> Response {
    ApiErrorResponse::from(err).into_response()
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
