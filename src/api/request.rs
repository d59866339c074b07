//! Request types for the salary estimation API.
//!
//! Field names are snake_case; the camelCase names submitted by the estimator
//! form are accepted as aliases.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CalculationInput, FeedbackRating, MetricType};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Region whose salary bands apply.
    pub region: String,
    /// Role title.
    pub role: String,
    /// Years of recruitment experience; required for scored roles.
    #[serde(default, alias = "yearsOfExperience")]
    pub years_of_experience: Option<f64>,
    /// Sector focus; required for scored roles.
    #[serde(default, alias = "sectorFocus")]
    pub sector_focus: Option<String>,
    /// Specialization fit, 1 to 5; defaults to 3.
    #[serde(default, alias = "specializationFit")]
    pub specialization_fit: Option<i64>,
    /// Performance track; defaults to placements.
    #[serde(default, alias = "metricType")]
    pub metric_type: MetricType,
    /// Annual billings; only read on the billings track.
    #[serde(default, alias = "annualBillings")]
    pub annual_billings: Option<Decimal>,
    /// Whether the candidate brings a client book.
    #[serde(default, alias = "hasClients")]
    pub has_clients: Option<bool>,
}

impl From<CalculationRequest> for CalculationInput {
    fn from(req: CalculationRequest) -> Self {
        CalculationInput {
            region: req.region,
            role: req.role,
            years_of_experience: req.years_of_experience,
            sector_focus: req.sector_focus,
            specialization_fit: req.specialization_fit,
            metric_type: req.metric_type,
            annual_billings: req.annual_billings,
            has_clients: req.has_clients,
        }
    }
}

/// Request body for the `/leads/check` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckLeadRequest {
    /// The email to look up.
    #[serde(default)]
    pub email: String,
}

/// Request body for the `/leads/feedback` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    /// Email of the lead giving feedback.
    #[serde(default)]
    pub email: String,
    /// Whether the estimate looked accurate.
    #[serde(alias = "estimateFeedback")]
    pub rating: FeedbackRating,
    /// Free-text comment.
    #[serde(default, alias = "extraFeedback")]
    pub comment: Option<String>,
    /// The formatted estimate the visitor was shown.
    #[serde(default, alias = "salaryOutput")]
    pub salary_output: Option<String>,
}
