//! Initial base salary calculation.
//!
//! Places the candidate within the band from the experience and
//! specialization factors, before any billings or client-book adjustment.

use crate::models::{AuditStep, MetricType};

/// Weight of the experience factor within the band.
pub const EXPERIENCE_WEIGHT: f64 = 0.4;

/// Adjustment for a billings-track input that reports no billings.
pub const MISSING_BILLINGS_ADJUSTMENT: f64 = 1.2;

/// The result of the initial base calculation.
#[derive(Debug, Clone)]
pub struct InitialBaseResult {
    /// The initial base salary.
    pub initial_base: f64,
    /// Whether the missing-billings adjustment was applied.
    pub missing_billings_adjusted: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes `min + (max - min) * (ef * 0.4 + sf)`.
///
/// On the billings track with zero billings the result is multiplied by 1.2;
/// the billings factor for that input stays at 1.0.
///
/// # Arguments
///
/// * `min`, `max` - The salary band
/// * `experience_factor` - From [`super::experience_factor`]
/// * `specialization_factor` - From [`super::specialization_factor`]
/// * `metric_type` - The performance track
/// * `annual_billings` - Normalized annual billings
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_initial_base(
    min: f64,
    max: f64,
    experience_factor: f64,
    specialization_factor: f64,
    metric_type: MetricType,
    annual_billings: f64,
    step_number: u32,
) -> InitialBaseResult {
    let band_position = experience_factor * EXPERIENCE_WEIGHT + specialization_factor;
    let unadjusted = min + (max - min) * band_position;

    let missing_billings_adjusted = metric_type == MetricType::Billings && annual_billings == 0.0;
    let initial_base = if missing_billings_adjusted {
        unadjusted * MISSING_BILLINGS_ADJUSTMENT
    } else {
        unadjusted
    };

    let mut reasoning = format!(
        "{} + ({} - {}) x ({:.4} x {} + {:.4}) = {:.2}",
        min, max, min, experience_factor, EXPERIENCE_WEIGHT, specialization_factor, unadjusted
    );
    if missing_billings_adjusted {
        reasoning.push_str(&format!(
            "; no billings reported on the billings track, x {} = {:.2}",
            MISSING_BILLINGS_ADJUSTMENT, initial_base
        ));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "initial_base".to_string(),
        rule_name: "Initial Base Salary".to_string(),
        input: serde_json::json!({
            "min": min,
            "max": max,
            "experience_factor": experience_factor,
            "specialization_factor": specialization_factor,
            "metric_type": metric_type.as_str(),
            "annual_billings": annual_billings
        }),
        output: serde_json::json!({
            "initial_base": initial_base,
            "missing_billings_adjusted": missing_billings_adjusted
        }),
        reasoning,
    };

    InitialBaseResult {
        initial_base,
        missing_billings_adjusted,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// IB-001: placements track places candidate in band
    #[test]
    fn test_placements_track() {
        let result =
            calculate_initial_base(100000.0, 180000.0, 1.6, 0.24, MetricType::Placements, 0.0, 5);

        assert!((result.initial_base - 170400.0).abs() < 1e-6);
        assert!(!result.missing_billings_adjusted);
        assert_eq!(result.audit_step.step_number, 5);
    }

    /// IB-002: zero billings on billings track gets 1.2x
    #[test]
    fn test_zero_billings_adjusted() {
        let result =
            calculate_initial_base(480000.0, 660000.0, 1.6, 0.1, MetricType::Billings, 0.0, 5);

        assert!((result.initial_base - 735840.0).abs() < 1e-6);
        assert!(result.missing_billings_adjusted);
        assert!(result.audit_step.reasoning.contains("no billings reported"));
    }

    #[test]
    fn test_positive_billings_not_adjusted() {
        let result =
            calculate_initial_base(480000.0, 660000.0, 1.6, 0.1, MetricType::Billings, 1.0, 5);

        assert!((result.initial_base - 613200.0).abs() < 1e-6);
        assert!(!result.missing_billings_adjusted);
    }

    #[test]
    fn test_minimum_factors_sit_at_forty_percent() {
        let result =
            calculate_initial_base(28000.0, 40000.0, 1.0, 0.0, MetricType::Placements, 0.0, 1);
        assert!((result.initial_base - 32800.0).abs() < 1e-6);
    }
}
