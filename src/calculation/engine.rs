//! The salary estimation pipeline.
//!
//! Runs the stages in order: band lookup, entry-level override, normalization,
//! experience, specialization, initial base, billings, client book, final base
//! and cap. Every stage is a pure function of its inputs and the rate table, so
//! the same input always yields the same [`Estimate`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{AuditTrace, CalculationInput, CalculationResult, Estimate};

use super::billings::{billings_threshold, calculate_billings_factor};
use super::client_book::calculate_client_book_multiplier;
use super::entry_level::apply_entry_level_override;
use super::experience::calculate_experience_factor;
use super::initial_base::calculate_initial_base;
use super::normalization::normalize_input;
use super::rate_lookup::{decimal_to_f64, lookup_rate};
use super::salary_cap::{calculate_final_base, enforce_salary_cap, round_half_up};
use super::specialization::calculate_specialization_factor;

/// Computes a salary estimate with its full audit trace.
///
/// # Errors
///
/// Returns `InvalidInput` when the region or role has no band, or when a scored
/// role is missing its years of experience or sector, or names an unknown sector.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::estimate;
/// use salary_engine::config::ConfigLoader;
/// use salary_engine::models::CalculationInput;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// let input = CalculationInput::new("United Kingdom", "Manager")
///     .with_years_of_experience(5.0)
///     .with_sector_focus("Legal");
///
/// let estimate = estimate(&input, loader.rate_table()).unwrap();
/// assert_eq!(estimate.result.amount, Decimal::from(64399));
/// assert!(estimate.audit_trace.has_step("salary_cap"));
/// ```
pub fn estimate(input: &CalculationInput, table: &RateTable) -> EngineResult<Estimate> {
    let mut trace = AuditTrace::default();

    let rate = lookup_rate(&input.region, &input.role, table, trace.next_step_number())?;
    let entry = rate.entry;
    trace.steps.push(rate.audit_step);

    if let Some(entry_level) =
        apply_entry_level_override(&input.role, &entry, table, trace.next_step_number())
    {
        debug!(role = %input.role, region = %input.region, "Entry-level override applied");
        trace.steps.push(entry_level.audit_step);
        return Ok(Estimate {
            result: entry_level.result,
            audit_trace: trace,
        });
    }

    let threshold = billings_threshold(&input.role, table)?;

    let normalization = normalize_input(input, table, trace.next_step_number())?;
    let normalized = normalization.input;
    trace.steps.push(normalization.audit_step);
    trace.warnings.extend(normalization.warnings);

    let min = decimal_to_f64(entry.min, "band minimum")?;
    let max = decimal_to_f64(entry.max, "band maximum")?;

    let experience = calculate_experience_factor(
        normalized.years_of_experience,
        table.experience_band_for(&input.role),
        trace.next_step_number(),
    );
    trace.steps.push(experience.audit_step);

    let specialization = calculate_specialization_factor(
        normalized.specialization_fit,
        &normalized.sector,
        normalized.high_demand_sector,
        trace.next_step_number(),
    );
    trace.steps.push(specialization.audit_step);

    let initial = calculate_initial_base(
        min,
        max,
        experience.factor,
        specialization.factor,
        normalized.metric_type,
        normalized.annual_billings,
        trace.next_step_number(),
    );
    trace.steps.push(initial.audit_step);

    let billings = calculate_billings_factor(
        normalized.metric_type,
        normalized.annual_billings,
        threshold,
        trace.next_step_number(),
    );
    trace.steps.push(billings.audit_step);

    let client_book = calculate_client_book_multiplier(
        normalized.has_clients,
        normalized.metric_type,
        normalized.annual_billings,
        threshold,
        trace.next_step_number(),
    );
    trace.steps.push(client_book.audit_step);

    let final_base = calculate_final_base(
        initial.initial_base,
        billings.factor,
        client_book.multiplier,
        trace.next_step_number(),
    );
    trace.steps.push(final_base.audit_step);

    let cap = enforce_salary_cap(
        final_base.final_base,
        min,
        max,
        billings.factor,
        trace.next_step_number(),
    );
    trace.steps.push(cap.audit_step);

    // bounded by max * 1.3, so the cast cannot saturate
    let amount = Decimal::from(round_half_up(cap.capped) as i64);
    debug!(
        role = %input.role,
        region = %input.region,
        amount = %amount,
        "Salary scored"
    );

    Ok(Estimate {
        result: CalculationResult {
            amount,
            currency_label: entry.currency_label,
        },
        audit_trace: trace,
    })
}

/// Computes a salary estimate.
///
/// Same as [`estimate`] without the audit trace.
pub fn compute(input: &CalculationInput, table: &RateTable) -> EngineResult<CalculationResult> {
    estimate(input, table).map(|estimate| estimate.result)
}
