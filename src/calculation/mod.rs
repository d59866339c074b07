//! Calculation logic for the salary estimation engine.
//!
//! This module contains one file per stage of the estimate: salary band lookup,
//! input normalization, the entry-level override, the experience and
//! specialization factors, the initial base, the billings factor, the client-book
//! multiplier and the final base with its dynamic cap. [`estimate`] and
//! [`compute`] run the stages in order; [`format_salary`] renders the result.

mod billings;
mod client_book;
mod engine;
mod entry_level;
mod experience;
mod format;
mod initial_base;
mod normalization;
mod rate_lookup;
mod salary_cap;
mod specialization;

pub use billings::{
    BILLINGS_FACTOR_CEILING, BILLINGS_FACTOR_FLOOR, BILLINGS_WEIGHT, BillingsFactorResult,
    billings_factor, billings_threshold, calculate_billings_factor,
};
pub use client_book::{
    CLIENT_BOOK_ABOVE_THRESHOLD_MULTIPLIER, CLIENT_BOOK_MULTIPLIER, ClientBookResult,
    calculate_client_book_multiplier, client_book_multiplier,
};
pub use engine::{compute, estimate};
pub use entry_level::{EntryLevelResult, apply_entry_level_override};
pub use experience::{
    EXPERIENCE_FACTOR_CAP, ExperienceFactorResult, calculate_experience_factor,
    experience_factor,
};
pub use format::format_salary;
pub use initial_base::{
    EXPERIENCE_WEIGHT, InitialBaseResult, MISSING_BILLINGS_ADJUSTMENT, calculate_initial_base,
};
pub use normalization::{
    DEFAULT_SPECIALIZATION_FIT, EXPERIENCE_WARNING_CODE, EXPERIENCE_WARNING_YEARS,
    NormalizationResult, NormalizedInput, SPECIALIZATION_FIT_MAX, SPECIALIZATION_FIT_MIN,
    normalize_input,
};
pub use rate_lookup::{RateLookupResult, lookup_rate};
pub use salary_cap::{
    BASE_ADJUSTMENT, FLOOR_RATIO, FinalBaseResult, HIGH_PERFORMER_BILLINGS_FACTOR,
    HIGH_PERFORMER_CEILING_RATIO, STANDARD_CEILING_RATIO, SalaryCapResult, calculate_final_base,
    enforce_salary_cap, round_half_up, salary_bounds,
};
pub use specialization::{
    HIGH_DEMAND_MULTIPLIER, SPECIALIZATION_WEIGHT, SpecializationFactorResult,
    calculate_specialization_factor, specialization_factor,
};
