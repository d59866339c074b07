//! Calculation input model.
//!
//! This module defines the raw [`CalculationInput`] a caller hands the engine
//! and the [`MetricType`] that selects between the placements and billings tracks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the candidate's performance is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    /// Performance measured by placement counts; billings are ignored.
    #[default]
    Placements,
    /// Performance measured by annual billings.
    Billings,
}

impl MetricType {
    /// Returns the wire name of the metric type.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Placements => "placements",
            MetricType::Billings => "billings",
        }
    }
}

/// The fields a caller supplies for one salary estimate.
///
/// Only `region` and `role` are always required. Entry-level roles ignore every
/// other field; scored roles require `years_of_experience` and `sector_focus`.
///
/// # Example
///
/// ```
/// use salary_engine::models::{CalculationInput, MetricType};
///
/// let input = CalculationInput::new("United States", "Director")
///     .with_years_of_experience(12.0)
///     .with_sector_focus("Tech")
///     .with_specialization_fit(5)
///     .with_has_clients(true);
/// assert_eq!(input.metric_type, MetricType::Placements);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Region whose salary bands apply (e.g., "United Kingdom").
    pub region: String,
    /// Role title (e.g., "Team Leader").
    pub role: String,
    /// Years of recruitment experience.
    #[serde(default)]
    pub years_of_experience: Option<f64>,
    /// Sector the candidate recruits into.
    #[serde(default)]
    pub sector_focus: Option<String>,
    /// Self-assessed fit with the specialization, 1 to 5.
    #[serde(default)]
    pub specialization_fit: Option<i64>,
    /// Performance track.
    #[serde(default)]
    pub metric_type: MetricType,
    /// Annual billings in local currency; read only on the billings track.
    #[serde(default)]
    pub annual_billings: Option<Decimal>,
    /// Whether the candidate brings a book of clients.
    #[serde(default)]
    pub has_clients: Option<bool>,
}

impl CalculationInput {
    /// Creates an input for a region and role with every other field unset.
    pub fn new(region: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            role: role.into(),
            years_of_experience: None,
            sector_focus: None,
            specialization_fit: None,
            metric_type: MetricType::Placements,
            annual_billings: None,
            has_clients: None,
        }
    }

    /// Sets the years of experience.
    pub fn with_years_of_experience(mut self, years: f64) -> Self {
        self.years_of_experience = Some(years);
        self
    }

    /// Sets the sector focus.
    pub fn with_sector_focus(mut self, sector: impl Into<String>) -> Self {
        self.sector_focus = Some(sector.into());
        self
    }

    /// Sets the specialization fit.
    pub fn with_specialization_fit(mut self, fit: i64) -> Self {
        self.specialization_fit = Some(fit);
        self
    }

    /// Switches to the billings track with the given annual billings.
    pub fn with_billings(mut self, annual_billings: Decimal) -> Self {
        self.metric_type = MetricType::Billings;
        self.annual_billings = Some(annual_billings);
        self
    }

    /// Sets whether the candidate brings a book of clients.
    pub fn with_has_clients(mut self, has_clients: bool) -> Self {
        self.has_clients = Some(has_clients);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_input() {
        let json = r#"{ "region": "United Kingdom", "role": "Trainee Recruiter" }"#;

        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, CalculationInput::new("United Kingdom", "Trainee Recruiter"));
        assert_eq!(input.metric_type, MetricType::Placements);
    }

    #[test]
    fn test_deserialize_billings_input() {
        let json = r#"{
            "region": "Dubai",
            "role": "Manager",
            "years_of_experience": 9,
            "sector_focus": "Finance",
            "specialization_fit": 4,
            "metric_type": "billings",
            "annual_billings": 850000,
            "has_clients": true
        }"#;

        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.metric_type, MetricType::Billings);
        assert_eq!(input.years_of_experience, Some(9.0));
        assert_eq!(input.annual_billings, Some(Decimal::from(850000)));
        assert_eq!(input.has_clients, Some(true));
    }

    #[test]
    fn test_deserialize_billings_as_string() {
        let json = r#"{ "region": "Dubai", "role": "Manager", "annual_billings": "125000.50" }"#;

        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.annual_billings, Some(Decimal::new(12500050, 2)));
    }

    #[test]
    fn test_unknown_metric_type_is_rejected() {
        let json = r#"{ "region": "Dubai", "role": "Manager", "metric_type": "revenue" }"#;
        assert!(serde_json::from_str::<CalculationInput>(json).is_err());
    }

    #[test]
    fn test_metric_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&MetricType::Billings).unwrap(),
            "\"billings\""
        );
        assert_eq!(MetricType::Placements.as_str(), "placements");
    }

    #[test]
    fn test_builder_sets_billings_track() {
        let input = CalculationInput::new("Dubai", "Manager").with_billings(Decimal::ZERO);
        assert_eq!(input.metric_type, MetricType::Billings);
        assert_eq!(input.annual_billings, Some(Decimal::ZERO));
    }
}
