//! Calculation result models for the salary estimation engine.
//!
//! This module contains the [`CalculationResult`] value returned by the engine
//! and the audit structures that explain how it was reached.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};

/// The outcome of one salary calculation.
///
/// `amount` is a whole number in the region's local currency and serializes
/// as a JSON integer.
///
/// # Example
///
/// ```
/// use salary_engine::models::CalculationResult;
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult {
///     amount: Decimal::from(24000),
///     currency_label: "£".to_string(),
/// };
/// assert_eq!(result.amount.scale(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The estimated annual base salary.
    #[serde(serialize_with = "serialize_whole_amount")]
    pub amount: Decimal,
    /// The currency label of the region (e.g., "£", "AED").
    pub currency_label: String,
}

fn serialize_whole_amount<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match amount.trunc().to_i64() {
        Some(whole) => serializer.serialize_i64(whole),
        None => Err(serde::ser::Error::custom(format!(
            "amount {} is out of range",
            amount
        ))),
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the stage that was applied.
    pub rule_id: String,
    /// The human-readable name of the stage.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag suspicious input that was still accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The ordered record of every stage that ran.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns the step number the next recorded step should use.
    pub fn next_step_number(&self) -> u32 {
        self.steps.len() as u32 + 1
    }

    /// Returns true if a step with the given rule id was recorded.
    pub fn has_step(&self, rule_id: &str) -> bool {
        self.steps.iter().any(|s| s.rule_id == rule_id)
    }
}

/// A calculation result together with the trace that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// The calculated salary.
    pub result: CalculationResult,
    /// How the salary was reached.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_step(step_number: u32, rule_id: &str) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: "Sample".to_string(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: String::new(),
        }
    }

    #[test]
    fn test_calculation_result_serializes_amount_as_integer() {
        let result = CalculationResult {
            amount: Decimal::from(45000),
            currency_label: "£".to_string(),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"amount\":45000"));
        assert!(json.contains("\"currency_label\":\"£\""));
    }

    #[test]
    fn test_calculation_result_deserializes_numeric_amount() {
        let json = r#"{ "amount": 45000, "currency_label": "$" }"#;
        let result: CalculationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.amount, Decimal::from(45000));
    }

    #[test]
    fn test_next_step_number_counts_from_one() {
        let mut trace = AuditTrace::default();
        assert_eq!(trace.next_step_number(), 1);

        trace.steps.push(create_sample_step(1, "rate_lookup"));
        assert_eq!(trace.next_step_number(), 2);
        assert!(trace.has_step("rate_lookup"));
        assert!(!trace.has_step("salary_cap"));
    }

    #[test]
    fn test_audit_warning_round_trip() {
        let warning = AuditWarning {
            code: "EXPERIENCE_UNUSUALLY_HIGH".to_string(),
            message: "Experience seems unusually high.".to_string(),
            severity: "low".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        let back: AuditWarning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, warning);
    }
}
