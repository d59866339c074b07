//! Billings factor calculation.
//!
//! Rewards billings relative to the role's threshold, floored at 1.0 and
//! capped at 1.15.

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, MetricType};

use super::rate_lookup::decimal_to_f64;

/// Weight of billings relative to the role threshold.
pub const BILLINGS_WEIGHT: f64 = 0.05;

/// Lowest billings factor.
pub const BILLINGS_FACTOR_FLOOR: f64 = 1.0;

/// Highest billings factor.
pub const BILLINGS_FACTOR_CEILING: f64 = 1.15;

/// The result of the billings factor calculation.
#[derive(Debug, Clone)]
pub struct BillingsFactorResult {
    /// The billings factor in `[1.0, 1.15]`.
    pub factor: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Looks up a role's billings threshold as `f64`.
///
/// Fails with `InvalidInput` when the role has no threshold.
pub fn billings_threshold(role: &str, table: &RateTable) -> EngineResult<f64> {
    let threshold = table.billings_threshold_for(role).ok_or_else(|| {
        EngineError::invalid_input("role", format!("Role '{}' has no billings threshold", role))
    })?;
    decimal_to_f64(threshold, "billings threshold")
}

/// Computes the billings factor.
///
/// `clamp(1 + (billings / threshold) * 0.05, 1.0, 1.15)` on the billings track
/// with positive billings; 1.0 otherwise.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::billings_factor;
/// use salary_engine::models::MetricType;
///
/// assert_eq!(billings_factor(MetricType::Placements, 900000.0, 600000.0), 1.0);
/// assert_eq!(billings_factor(MetricType::Billings, 0.0, 600000.0), 1.0);
/// assert_eq!(billings_factor(MetricType::Billings, 6000000.0, 600000.0), 1.15);
/// ```
pub fn billings_factor(metric_type: MetricType, annual_billings: f64, threshold: f64) -> f64 {
    if metric_type == MetricType::Billings && annual_billings > 0.0 {
        let raw = 1.0 + (annual_billings / threshold) * BILLINGS_WEIGHT;
        BILLINGS_FACTOR_FLOOR.max(raw.min(BILLINGS_FACTOR_CEILING))
    } else {
        BILLINGS_FACTOR_FLOOR
    }
}

/// Computes the billings factor and records it.
pub fn calculate_billings_factor(
    metric_type: MetricType,
    annual_billings: f64,
    threshold: f64,
    step_number: u32,
) -> BillingsFactorResult {
    let factor = billings_factor(metric_type, annual_billings, threshold);
    let applies = metric_type == MetricType::Billings && annual_billings > 0.0;

    let reasoning = if applies {
        format!(
            "1 + ({} / {}) x {} clamped to [{}, {}] = {:.4}",
            annual_billings,
            threshold,
            BILLINGS_WEIGHT,
            BILLINGS_FACTOR_FLOOR,
            BILLINGS_FACTOR_CEILING,
            factor
        )
    } else {
        format!(
            "No billings adjustment on the {} track with billings {}",
            metric_type.as_str(),
            annual_billings
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "billings_factor".to_string(),
        rule_name: "Billings Factor".to_string(),
        input: serde_json::json!({
            "metric_type": metric_type.as_str(),
            "annual_billings": annual_billings,
            "billings_threshold": threshold
        }),
        output: serde_json::json!({
            "billings_factor": factor,
            "applied": applies
        }),
        reasoning,
    };

    BillingsFactorResult { factor, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    /// BF-001: half the threshold adds 2.5%
    #[test]
    fn test_half_threshold() {
        let factor = billings_factor(MetricType::Billings, 300000.0, 600000.0);
        assert!((factor - 1.025).abs() < 1e-12);
    }

    /// BF-002: factor capped at 1.15
    #[test]
    fn test_capped_at_ceiling() {
        let result = calculate_billings_factor(MetricType::Billings, 3600000.0, 600000.0, 6);

        assert_eq!(result.factor, BILLINGS_FACTOR_CEILING);
        assert!(result.audit_step.output["applied"].as_bool().unwrap());
    }

    /// BF-003: zero billings on billings track stays at 1.0
    #[test]
    fn test_zero_billings_is_floor() {
        let result = calculate_billings_factor(MetricType::Billings, 0.0, 700000.0, 6);

        assert_eq!(result.factor, 1.0);
        assert!(!result.audit_step.output["applied"].as_bool().unwrap());
    }

    #[test]
    fn test_placements_track_ignores_billings() {
        assert_eq!(billings_factor(MetricType::Placements, 5000000.0, 100000.0), 1.0);
    }

    #[test]
    fn test_threshold_lookup() {
        let loader = ConfigLoader::builtin().unwrap();
        assert_eq!(
            billings_threshold("Team Leader", loader.rate_table()).unwrap(),
            600000.0
        );
        assert!(billings_threshold("Astronaut", loader.rate_table()).is_err());
    }
}
