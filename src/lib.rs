//! Recruiter salary estimation engine
//!
//! This crate estimates a recruiter's annual base salary from a regional salary
//! guide: band lookup by region and role, an entry-level override, and a
//! deterministic scoring formula over experience, specialization, billings and
//! client book. It also serves the estimate over HTTP together with the lead
//! registration and feedback flows that surround it.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod leads;
pub mod models;
