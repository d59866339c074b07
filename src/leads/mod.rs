//! Lead storage for the registration and feedback flows.
//!
//! The API talks to storage only through [`LeadStore`]. [`NotionLeadStore`]
//! persists leads to a Notion database; [`InMemoryLeadStore`] keeps them for
//! the life of the process and backs the server when Notion is not configured.

mod memory;
mod notion;

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{Feedback, Lead, NewLead};

pub use memory::InMemoryLeadStore;
pub use notion::{NOTION_VERSION, NotionLeadStore};

/// A store of registered leads keyed by normalized email.
///
/// Implementations normalize every email they receive (trimmed, lower-cased)
/// before matching.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Returns true if a lead is registered under the email.
    async fn exists(&self, email: &str) -> EngineResult<bool>;

    /// Validates and registers a new lead.
    ///
    /// Fails with `InvalidLead` on a bad registration and `LeadAlreadyExists`
    /// when the email is taken.
    async fn create(&self, new_lead: NewLead) -> EngineResult<Lead>;

    /// Attaches feedback to an existing lead, replacing any earlier feedback.
    ///
    /// Fails with `LeadNotFound` when no lead has the email.
    async fn record_feedback(&self, email: &str, feedback: Feedback) -> EngineResult<Lead>;
}
