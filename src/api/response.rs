//! Response types for the salary estimation API.
//!
//! This module defines the success bodies of each endpoint, the error
//! response structure, and the mapping from [`EngineError`] to HTTP status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{GuideMetadata, RateTable};
use crate::error::EngineError;
use crate::models::{AuditStep, AuditWarning, CalculationResult};

/// Response body for a successful `/calculate` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    /// Unique identifier of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the estimate.
    pub engine_version: String,
    /// Version of the salary guide that was applied.
    pub guide_version: String,
    /// The estimate.
    pub result: CalculationResult,
    /// The estimate rendered for display (e.g., "£45,000").
    pub formatted: String,
    /// How the estimate was reached.
    pub audit_trace: AuditTraceResponse,
}

/// The audit trace with its timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditTraceResponse {
    /// The stages that ran, in order.
    pub steps: Vec<AuditStep>,
    /// Warnings about accepted but unusual input.
    pub warnings: Vec<AuditWarning>,
    /// Calculation time in microseconds.
    pub duration_us: u64,
}

/// A region option with its currency label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOption {
    /// Region name.
    pub name: String,
    /// Currency label for the region.
    pub currency: String,
}

/// Response body for `/reference`: the options an estimator form offers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceResponse {
    /// The salary guide in use.
    pub guide: GuideMetadata,
    /// Every region, ordered by name.
    pub regions: Vec<RegionOption>,
    /// Every role, ordered by seniority.
    pub roles: Vec<String>,
    /// Accepted sectors.
    pub sectors: Vec<String>,
    /// Sectors that amplify the specialization bonus.
    pub high_demand_sectors: Vec<String>,
    /// Roles paid at the band minimum without scoring.
    pub entry_level_roles: Vec<String>,
}

impl From<&RateTable> for ReferenceResponse {
    fn from(table: &RateTable) -> Self {
        ReferenceResponse {
            guide: table.guide().clone(),
            regions: table
                .regions()
                .map(|(name, currency)| RegionOption {
                    name: name.to_string(),
                    currency: currency.to_string(),
                })
                .collect(),
            roles: table.roles().into_iter().map(str::to_string).collect(),
            sectors: table.sectors().to_vec(),
            high_demand_sectors: table.high_demand_sectors().to_vec(),
            entry_level_roles: table.entry_level_roles().to_vec(),
        }
    }
}

/// Response body for `/leads/check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadCheckResponse {
    /// Whether a lead is registered under the email.
    pub exists: bool,
    /// The normalized email that was checked.
    pub email: String,
}

/// Response body for a successful `/leads` registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadCreatedResponse {
    /// Always true.
    pub success: bool,
    /// Identifier of the new lead.
    pub id: Uuid,
}

/// Response body for a successful `/leads/feedback` submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always true.
    pub success: bool,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details("INVALID_INPUT", message, field),
            },
            EngineError::InvalidLead { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details("VALIDATION_ERROR", message, field),
            },
            EngineError::LeadNotFound { email } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "LEAD_NOT_FOUND",
                    "No registration found for this email",
                    email,
                ),
            },
            EngineError::LeadAlreadyExists { email } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "LEAD_ALREADY_EXISTS",
                    "This email is already registered",
                    email,
                ),
            },
            EngineError::LeadStoreError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("LEAD_STORE_ERROR", "Lead store failed", message),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    message,
                ),
            },
        }
    }
}
