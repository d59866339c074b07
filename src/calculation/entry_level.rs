//! Entry-level override.
//!
//! Entry-level roles have no track record to score, so they are paid the
//! bottom of their regional band and skip every scoring stage.

use crate::config::{RateEntry, RateTable};
use crate::models::{AuditStep, CalculationResult};

/// The result of the entry-level override, including the audit step.
#[derive(Debug, Clone)]
pub struct EntryLevelResult {
    /// The final result: the band minimum in the region's currency.
    pub result: CalculationResult,
    /// The audit step recording the override.
    pub audit_step: AuditStep,
}

/// Applies the entry-level override when the role qualifies.
///
/// Returns `None` for roles that must be scored. When it fires, the amount is
/// exactly `entry.min`; no other input field is consulted.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{apply_entry_level_override, lookup_rate};
/// use salary_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// let table = loader.rate_table();
/// let band = lookup_rate("United Kingdom", "Trainee Recruiter", table, 1).unwrap().entry;
///
/// let result = apply_entry_level_override("Trainee Recruiter", &band, table, 2).unwrap();
/// assert_eq!(result.result.amount, Decimal::from(24000));
/// assert_eq!(result.result.currency_label, "£");
/// ```
pub fn apply_entry_level_override(
    role: &str,
    entry: &RateEntry,
    table: &RateTable,
    step_number: u32,
) -> Option<EntryLevelResult> {
    if !table.is_entry_level_role(role) {
        return None;
    }

    let result = CalculationResult {
        amount: entry.min,
        currency_label: entry.currency_label.clone(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "entry_level_override".to_string(),
        rule_name: "Entry-Level Override".to_string(),
        input: serde_json::json!({
            "role": role,
            "min": entry.min.to_string()
        }),
        output: serde_json::json!({
            "amount": result.amount.to_string(),
            "currency_label": result.currency_label,
            "scoring_skipped": true
        }),
        reasoning: format!(
            "'{}' is entry-level: paid the band minimum {}{}",
            role, entry.currency_label, entry.min
        ),
    };

    Some(EntryLevelResult { result, audit_step })
}
