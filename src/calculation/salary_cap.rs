//! Final base salary and dynamic cap enforcement.
//!
//! Combines the initial base with the billings and client-book multipliers,
//! then clamps the result to a band-relative floor and ceiling. Strong billers
//! (billings factor above 1.1) get the higher ceiling.

use crate::models::AuditStep;

/// Flat adjustment applied to every scored salary.
pub const BASE_ADJUSTMENT: f64 = 0.9;

/// Floor as a fraction of the band minimum.
pub const FLOOR_RATIO: f64 = 0.8;

/// Standard ceiling as a fraction of the band maximum.
pub const STANDARD_CEILING_RATIO: f64 = 1.2;

/// Ceiling for strong billers as a fraction of the band maximum.
pub const HIGH_PERFORMER_CEILING_RATIO: f64 = 1.3;

/// Billings factor above which the higher ceiling applies.
pub const HIGH_PERFORMER_BILLINGS_FACTOR: f64 = 1.1;

/// The result of the final base calculation.
#[derive(Debug, Clone)]
pub struct FinalBaseResult {
    /// `initial_base * billings_factor * 0.9 * client_book_multiplier`.
    pub final_base: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of cap enforcement.
#[derive(Debug, Clone)]
pub struct SalaryCapResult {
    /// The clamped salary, not yet rounded.
    pub capped: f64,
    /// The floor that applied.
    pub floor: f64,
    /// The ceiling that applied.
    pub ceiling: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the final base salary.
pub fn calculate_final_base(
    initial_base: f64,
    billings_factor: f64,
    client_book_multiplier: f64,
    step_number: u32,
) -> FinalBaseResult {
    let final_base = initial_base * billings_factor * BASE_ADJUSTMENT * client_book_multiplier;

    let audit_step = AuditStep {
        step_number,
        rule_id: "final_base".to_string(),
        rule_name: "Final Base Salary".to_string(),
        input: serde_json::json!({
            "initial_base": initial_base,
            "billings_factor": billings_factor,
            "base_adjustment": BASE_ADJUSTMENT,
            "client_book_multiplier": client_book_multiplier
        }),
        output: serde_json::json!({
            "final_base": final_base
        }),
        reasoning: format!(
            "{:.2} x {:.4} x {} x {} = {:.2}",
            initial_base, billings_factor, BASE_ADJUSTMENT, client_book_multiplier, final_base
        ),
    };

    FinalBaseResult {
        final_base,
        audit_step,
    }
}

/// Returns the `(floor, ceiling)` pair for a band and billings factor.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::salary_bounds;
///
/// assert_eq!(salary_bounds(50000.0, 100000.0, 1.1), (40000.0, 120000.0));
/// assert_eq!(salary_bounds(50000.0, 100000.0, 1.15), (40000.0, 130000.0));
/// ```
pub fn salary_bounds(min: f64, max: f64, billings_factor: f64) -> (f64, f64) {
    let ceiling_ratio = if billings_factor > HIGH_PERFORMER_BILLINGS_FACTOR {
        HIGH_PERFORMER_CEILING_RATIO
    } else {
        STANDARD_CEILING_RATIO
    };
    (min * FLOOR_RATIO, max * ceiling_ratio)
}

/// Clamps the final base into the dynamic bounds.
pub fn enforce_salary_cap(
    final_base: f64,
    min: f64,
    max: f64,
    billings_factor: f64,
    step_number: u32,
) -> SalaryCapResult {
    let (floor, ceiling) = salary_bounds(min, max, billings_factor);
    let capped = floor.max(final_base.min(ceiling));

    let reasoning = if capped > final_base {
        format!("{:.2} raised to the floor {:.2}", final_base, floor)
    } else if capped < final_base {
        format!("{:.2} limited to the ceiling {:.2}", final_base, ceiling)
    } else {
        format!("{:.2} within [{:.2}, {:.2}]", final_base, floor, ceiling)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_cap".to_string(),
        rule_name: "Dynamic Salary Cap".to_string(),
        input: serde_json::json!({
            "final_base": final_base,
            "billings_factor": billings_factor,
            "min": min,
            "max": max
        }),
        output: serde_json::json!({
            "floor": floor,
            "ceiling": ceiling,
            "high_performer_ceiling": billings_factor > HIGH_PERFORMER_BILLINGS_FACTOR,
            "capped": capped
        }),
        reasoning,
    };

    SalaryCapResult {
        capped,
        floor,
        ceiling,
        audit_step,
    }
}

/// Rounds half up to the nearest whole number.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_base_applies_all_multipliers() {
        let result = calculate_final_base(61400.0, 1.15, 1.1, 8);
        assert!((result.final_base - 69903.9).abs() < 1e-6);
        assert_eq!(result.audit_step.rule_id, "final_base");
    }

    /// SC-001: standard ceiling limits a large salary
    #[test]
    fn test_standard_ceiling() {
        let result = enforce_salary_cap(150000.0, 50000.0, 100000.0, 1.05, 9);

        assert_eq!(result.capped, 120000.0);
        assert!(result.audit_step.reasoning.contains("ceiling"));
        assert!(!result.audit_step.output["high_performer_ceiling"].as_bool().unwrap());
    }

    /// SC-002: billings factor above 1.1 lifts the ceiling to 130%
    #[test]
    fn test_high_performer_ceiling() {
        let result = enforce_salary_cap(150000.0, 50000.0, 100000.0, 1.12, 9);

        assert_eq!(result.capped, 130000.0);
        assert_eq!(result.ceiling, 130000.0);
    }

    /// SC-003: billings factor of exactly 1.1 keeps the standard ceiling
    #[test]
    fn test_boundary_factor_keeps_standard_ceiling() {
        let (_, ceiling) = salary_bounds(50000.0, 100000.0, HIGH_PERFORMER_BILLINGS_FACTOR);
        assert_eq!(ceiling, 120000.0);
    }

    /// SC-004: floor raises a small salary
    #[test]
    fn test_floor() {
        let result = enforce_salary_cap(10000.0, 50000.0, 100000.0, 1.0, 9);

        assert_eq!(result.capped, 40000.0);
        assert!(result.audit_step.reasoning.contains("floor"));
    }

    #[test]
    fn test_within_bounds_unchanged() {
        let result = enforce_salary_cap(64399.18, 55000.0, 80000.0, 1.0, 9);
        assert_eq!(result.capped, 64399.18);
        assert!(result.audit_step.reasoning.contains("within"));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(59473.5), 59474.0);
        assert_eq!(round_half_up(59473.49), 59473.0);
        assert_eq!(round_half_up(161028.0), 161028.0);
    }
}
