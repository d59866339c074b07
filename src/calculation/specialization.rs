//! Specialization factor calculation.

use crate::models::AuditStep;

/// Weight of a perfect specialization fit.
pub const SPECIALIZATION_WEIGHT: f64 = 0.2;

/// Multiplier applied to the factor in a high-demand sector.
pub const HIGH_DEMAND_MULTIPLIER: f64 = 1.2;

/// The result of the specialization factor calculation.
#[derive(Debug, Clone)]
pub struct SpecializationFactorResult {
    /// The specialization factor in `[0.0, 0.24]`.
    pub factor: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes `((fit - 1) / 4) * 0.2`, times 1.2 in a high-demand sector.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::specialization_factor;
///
/// assert_eq!(specialization_factor(1, true), 0.0);
/// assert_eq!(specialization_factor(5, false), 0.2);
/// ```
pub fn specialization_factor(fit: u8, high_demand: bool) -> f64 {
    let factor = ((f64::from(fit) - 1.0) / 4.0) * SPECIALIZATION_WEIGHT;
    if high_demand {
        factor * HIGH_DEMAND_MULTIPLIER
    } else {
        factor
    }
}

/// Computes the specialization factor and records it.
pub fn calculate_specialization_factor(
    fit: u8,
    sector: &str,
    high_demand: bool,
    step_number: u32,
) -> SpecializationFactorResult {
    let factor = specialization_factor(fit, high_demand);

    let reasoning = if high_demand {
        format!(
            "(({} - 1) / 4) x {} x {} ({} is high-demand) = {:.4}",
            fit, SPECIALIZATION_WEIGHT, HIGH_DEMAND_MULTIPLIER, sector, factor
        )
    } else {
        format!(
            "(({} - 1) / 4) x {} = {:.4}",
            fit, SPECIALIZATION_WEIGHT, factor
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "specialization_factor".to_string(),
        rule_name: "Specialization Factor".to_string(),
        input: serde_json::json!({
            "specialization_fit": fit,
            "sector": sector,
            "high_demand_sector": high_demand
        }),
        output: serde_json::json!({
            "specialization_factor": factor
        }),
        reasoning,
    };

    SpecializationFactorResult { factor, audit_step }
}
