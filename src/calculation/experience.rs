//! Experience factor calculation.
//!
//! Tenure earns logarithmically diminishing returns, capped at 1.6.

use crate::config::ExperienceBand;
use crate::models::AuditStep;

/// Upper bound of the experience factor.
pub const EXPERIENCE_FACTOR_CAP: f64 = 1.6;

/// The result of the experience factor calculation.
#[derive(Debug, Clone)]
pub struct ExperienceFactorResult {
    /// The experience factor in `[1.0, 1.6]`.
    pub factor: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes `min(1 + ln(years / 10 + 1), 1.6)`.
///
/// Non-decreasing in `years`; equals 1.0 at zero years.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::experience_factor;
///
/// assert_eq!(experience_factor(0.0), 1.0);
/// assert_eq!(experience_factor(25.0), 1.6);
/// ```
pub fn experience_factor(years: f64) -> f64 {
    (1.0 + (years / 10.0 + 1.0).ln()).min(EXPERIENCE_FACTOR_CAP)
}

/// Computes the experience factor and records it.
///
/// The role's experience band, when one exists, is echoed in the audit step but
/// never applied: every role shares the same curve.
pub fn calculate_experience_factor(
    years: f64,
    role_band: Option<&ExperienceBand>,
    step_number: u32,
) -> ExperienceFactorResult {
    let factor = experience_factor(years);
    let capped = factor >= EXPERIENCE_FACTOR_CAP;

    let audit_step = AuditStep {
        step_number,
        rule_id: "experience_factor".to_string(),
        rule_name: "Experience Factor".to_string(),
        input: serde_json::json!({
            "years_of_experience": years,
            "role_experience_band": role_band
        }),
        output: serde_json::json!({
            "experience_factor": factor,
            "capped": capped,
            "role_band_applied": false
        }),
        reasoning: if capped {
            format!("{} years reaches the {} cap", years, EXPERIENCE_FACTOR_CAP)
        } else {
            format!("1 + ln({} / 10 + 1) = {:.4}", years, factor)
        },
    };

    ExperienceFactorResult { factor, audit_step }
}
