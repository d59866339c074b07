//! Rate lookup functionality.
//!
//! This module resolves a (region, role) pair to its salary band. It is the
//! only place the engine turns an unknown region or role into an error.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::{RateEntry, RateTable};
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of a rate lookup, including the band and audit step.
#[derive(Debug, Clone)]
pub struct RateLookupResult {
    /// The resolved salary band.
    pub entry: RateEntry,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Resolves the salary band for a region and role.
///
/// # Arguments
///
/// * `region` - The region name (e.g., "United Kingdom")
/// * `role` - The role title (e.g., "Manager")
/// * `table` - The rate table to search
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `RateLookupResult`, or `InvalidInput` if:
/// - The region has no bands (`field = "region"`)
/// - The role has no band in that region (`field = "role"`)
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::lookup_rate;
/// use salary_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// let result = lookup_rate("United Kingdom", "Manager", loader.rate_table(), 1).unwrap();
/// assert_eq!(result.entry.min, Decimal::from(55000));
/// assert_eq!(result.entry.currency_label, "£");
/// ```
pub fn lookup_rate(
    region: &str,
    role: &str,
    table: &RateTable,
    step_number: u32,
) -> EngineResult<RateLookupResult> {
    if !table.has_region(region) {
        return Err(EngineError::invalid_input(
            "region",
            format!("Unknown region '{}'", region),
        ));
    }

    let entry = table.rate_for(region, role).ok_or_else(|| {
        EngineError::invalid_input(
            "role",
            format!("Role '{}' has no salary band in region '{}'", role, region),
        )
    })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "rate_lookup".to_string(),
        rule_name: "Salary Band Lookup".to_string(),
        input: serde_json::json!({
            "region": region,
            "role": role
        }),
        output: serde_json::json!({
            "min": entry.min.to_string(),
            "max": entry.max.to_string(),
            "currency_label": entry.currency_label,
            "guide_version": table.guide().version
        }),
        reasoning: format!(
            "Band for '{}' in '{}': {}{} - {}{}",
            role, region, entry.currency_label, entry.min, entry.currency_label, entry.max
        ),
    };

    Ok(RateLookupResult { entry, audit_step })
}

/// Converts a reference-data amount to `f64` for the scoring arithmetic.
pub(crate) fn decimal_to_f64(value: Decimal, what: &str) -> EngineResult<f64> {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("{} {} is not representable as a float", what, value),
        })
}
