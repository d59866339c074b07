//! Lead records captured by the registration and feedback flows.
//!
//! A lead is created when a visitor registers and is later annotated with
//! their opinion of the estimate they received.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Normalizes an email for storage and lookup: trimmed and lower-cased.
///
/// # Example
///
/// ```
/// use salary_engine::models::normalize_email;
///
/// assert_eq!(normalize_email("  Jane.Doe@Example.COM "), "jane.doe@example.com");
/// ```
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Recruitment sectors as submitted: either a list or a comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectorList {
    /// A JSON array of sector names.
    List(Vec<String>),
    /// A single comma-separated string.
    Joined(String),
}

impl Default for SectorList {
    fn default() -> Self {
        SectorList::List(Vec::new())
    }
}

impl SectorList {
    /// Splits and trims the sectors, dropping empty entries.
    pub fn into_sectors(self) -> Vec<String> {
        let raw = match self {
            SectorList::List(items) => items,
            SectorList::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        };
        raw.into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// A registration as submitted, before validation.
///
/// The registration form's camelCase names (`firstName`, `location`,
/// `recruitmentSector`, ...) are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    /// Given name.
    #[serde(default, alias = "firstName")]
    pub first_name: String,
    /// Family name.
    #[serde(default, alias = "lastName")]
    pub last_name: String,
    /// Contact email; the lead's identity.
    #[serde(default)]
    pub email: String,
    /// Employer, if given.
    #[serde(default, alias = "companyName")]
    pub company_name: Option<String>,
    /// Region the registrant works in.
    #[serde(default, alias = "location")]
    pub region: String,
    /// Phone number, if given.
    #[serde(default)]
    pub telephone: Option<String>,
    /// Current role title.
    #[serde(default, alias = "currentRole")]
    pub current_role: String,
    /// Sectors the registrant recruits into.
    #[serde(default, alias = "recruitmentSector", alias = "recruitmentSectors")]
    pub recruitment_sectors: SectorList,
}

/// A registered lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    /// Store-assigned identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Normalized email.
    pub email: String,
    /// Employer, if given.
    pub company_name: Option<String>,
    /// Region the registrant works in.
    pub region: String,
    /// Phone number, if given.
    pub telephone: Option<String>,
    /// Current role title.
    pub current_role: String,
    /// Sectors the registrant recruits into.
    pub recruitment_sectors: Vec<String>,
    /// Latest feedback on an estimate, if any.
    pub feedback: Option<Feedback>,
    /// When the lead registered.
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Validates a registration and builds the lead it describes.
    ///
    /// First name, last name, email (containing `@`), region, current role and at
    /// least one sector are required. Blank optional fields become `None`.
    pub fn from_registration(new_lead: NewLead, created_at: DateTime<Utc>) -> EngineResult<Self> {
        let first_name = required("first_name", &new_lead.first_name)?;
        let last_name = required("last_name", &new_lead.last_name)?;
        let email = normalize_email(&required("email", &new_lead.email)?);
        if !email.contains('@') {
            return Err(EngineError::invalid_lead("email", "Please enter a valid email"));
        }
        let region = required("region", &new_lead.region)?;
        let current_role = required("current_role", &new_lead.current_role)?;

        let recruitment_sectors = new_lead.recruitment_sectors.into_sectors();
        if recruitment_sectors.is_empty() {
            return Err(EngineError::invalid_lead(
                "recruitment_sectors",
                "Please select at least one sector",
            ));
        }

        Ok(Lead {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            company_name: optional(new_lead.company_name),
            region,
            telephone: optional(new_lead.telephone),
            current_role,
            recruitment_sectors,
            feedback: None,
            created_at,
        })
    }
}

fn required(field: &str, value: &str) -> EngineResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::invalid_lead(field, "is required"));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Whether the visitor thought the estimate was accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackRating {
    /// The estimate looked right.
    Positive,
    /// The estimate looked wrong.
    Negative,
}

/// Feedback attached to a lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Accuracy rating.
    pub rating: FeedbackRating,
    /// Free-text comment, if given.
    pub comment: Option<String>,
    /// The formatted estimate the visitor was shown (e.g., "£45,000").
    pub salary_output: Option<String>,
    /// When the feedback was recorded.
    pub recorded_at: DateTime<Utc>,
}
