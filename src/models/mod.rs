//! Core data models for the salary estimation engine.
//!
//! This module contains the domain models used throughout the engine and API.

mod calculation_input;
mod calculation_result;
mod lead;

pub use calculation_input::{CalculationInput, MetricType};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult, Estimate};
pub use lead::{Feedback, FeedbackRating, Lead, NewLead, SectorList, normalize_email};
