//! HTTP API module for the salary estimation engine.
//!
//! This module provides the REST endpoints for estimating a recruiter's base
//! salary, listing the guide's options, and the lead registration and
//! feedback flows.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{ENGINE_VERSION, create_router};
pub use request::{CalculationRequest, CheckLeadRequest, FeedbackRequest};
pub use response::{
    ApiError, AuditTraceResponse, EstimateResponse, LeadCheckResponse, LeadCreatedResponse,
    ReferenceResponse, RegionOption, SuccessResponse,
};
pub use state::AppState;
