//! Input normalization.
//!
//! Turns a raw [`CalculationInput`] into the numbers the scoring stages use:
//! numeric fields are coerced and clamped, categorical fields are checked
//! against the rate table.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning, CalculationInput, MetricType};

use super::rate_lookup::decimal_to_f64;

/// Lowest accepted specialization fit.
pub const SPECIALIZATION_FIT_MIN: i64 = 1;

/// Highest accepted specialization fit.
pub const SPECIALIZATION_FIT_MAX: i64 = 5;

/// Specialization fit assumed when none is given.
pub const DEFAULT_SPECIALIZATION_FIT: i64 = 3;

/// Experience above this many years is accepted but flagged.
pub const EXPERIENCE_WARNING_YEARS: f64 = 30.0;

/// Warning code for implausibly long experience.
pub const EXPERIENCE_WARNING_CODE: &str = "EXPERIENCE_UNUSUALLY_HIGH";

/// Calculation-ready input for a scored role.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInput {
    /// Years of experience, never negative or NaN.
    pub years_of_experience: f64,
    /// Canonical sector name.
    pub sector: String,
    /// Whether the sector is high-demand.
    pub high_demand_sector: bool,
    /// Specialization fit in `1..=5`.
    pub specialization_fit: u8,
    /// Performance track.
    pub metric_type: MetricType,
    /// Annual billings as given; zero on the placements track.
    pub annual_billings: f64,
    /// Whether the candidate brings a book of clients.
    pub has_clients: bool,
}

/// The result of normalization.
#[derive(Debug, Clone)]
pub struct NormalizationResult {
    /// The normalized input.
    pub input: NormalizedInput,
    /// Warnings about accepted but suspicious values.
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording the coercions.
    pub audit_step: AuditStep,
}

/// Normalizes the fields a scored role needs.
///
/// - `years_of_experience` is required; negative and NaN values become 0,
///   and values above 30 raise an `EXPERIENCE_UNUSUALLY_HIGH` warning.
/// - `sector_focus` is required and must name a known sector or alias.
/// - `specialization_fit` defaults to 3 and is clamped to `1..=5`.
/// - `annual_billings` is 0 on the placements track or when unset. Negative
///   billings keep their sign, so neither the missing-billings adjustment nor
///   the billings factor fires for them.
/// - `has_clients` defaults to `false`.
///
/// Fails with `InvalidInput` when a required field is missing or the sector is unknown.
pub fn normalize_input(
    input: &CalculationInput,
    table: &RateTable,
    step_number: u32,
) -> EngineResult<NormalizationResult> {
    let raw_years = input.years_of_experience.ok_or_else(|| {
        EngineError::invalid_input("years_of_experience", "Please enter years of experience")
    })?;
    let years_of_experience = if raw_years.is_nan() {
        0.0
    } else {
        raw_years.max(0.0)
    };

    let raw_sector = input
        .sector_focus
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| EngineError::invalid_input("sector_focus", "Please select a sector"))?;
    let sector = table.canonical_sector(raw_sector).ok_or_else(|| {
        EngineError::invalid_input("sector_focus", format!("Unknown sector '{}'", raw_sector))
    })?;
    let high_demand_sector = table.is_high_demand_sector(sector);

    let specialization_fit = input
        .specialization_fit
        .unwrap_or(DEFAULT_SPECIALIZATION_FIT)
        .clamp(SPECIALIZATION_FIT_MIN, SPECIALIZATION_FIT_MAX) as u8;

    let annual_billings = match input.metric_type {
        MetricType::Placements => 0.0,
        MetricType::Billings => {
            let billings = input.annual_billings.unwrap_or(Decimal::ZERO);
            decimal_to_f64(billings, "annual billings")?
        }
    };

    let has_clients = input.has_clients.unwrap_or(false);

    let mut warnings = Vec::new();
    if years_of_experience > EXPERIENCE_WARNING_YEARS {
        warnings.push(AuditWarning {
            code: EXPERIENCE_WARNING_CODE.to_string(),
            message: "Experience seems unusually high. Typical values are 0-30 years. \
                      Proceed with caution."
                .to_string(),
            severity: "low".to_string(),
        });
    }

    let normalized = NormalizedInput {
        years_of_experience,
        sector: sector.to_string(),
        high_demand_sector,
        specialization_fit,
        metric_type: input.metric_type,
        annual_billings,
        has_clients,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "normalization".to_string(),
        rule_name: "Input Normalization".to_string(),
        input: serde_json::json!({
            "years_of_experience": input.years_of_experience,
            "sector_focus": input.sector_focus,
            "specialization_fit": input.specialization_fit,
            "metric_type": input.metric_type.as_str(),
            "annual_billings": input.annual_billings.map(|b| b.to_string()),
            "has_clients": input.has_clients
        }),
        output: serde_json::json!({
            "years_of_experience": normalized.years_of_experience,
            "sector": normalized.sector,
            "high_demand_sector": normalized.high_demand_sector,
            "specialization_fit": normalized.specialization_fit,
            "annual_billings": normalized.annual_billings,
            "has_clients": normalized.has_clients
        }),
        reasoning: format!(
            "{} years, sector {}, fit {}, {} track, billings {}, clients {}",
            normalized.years_of_experience,
            normalized.sector,
            normalized.specialization_fit,
            normalized.metric_type.as_str(),
            normalized.annual_billings,
            normalized.has_clients
        ),
    };

    Ok(NormalizationResult {
        input: normalized,
        warnings,
        audit_step,
    })
}
