//! In-memory lead store.
//!
//! Leads live for the lifetime of the process.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Feedback, Lead, NewLead, normalize_email};

use super::LeadStore;

/// A [`LeadStore`] backed by a map from normalized email to lead.
#[derive(Debug, Default)]
pub struct InMemoryLeadStore {
    leads: RwLock<HashMap<String, Lead>>,
}

impl InMemoryLeadStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered leads.
    pub async fn len(&self) -> usize {
        self.leads.read().await.len()
    }

    /// Returns true if no leads are registered.
    pub async fn is_empty(&self) -> bool {
        self.leads.read().await.is_empty()
    }

    /// Returns a copy of the lead registered under the email, if any.
    pub async fn get(&self, email: &str) -> Option<Lead> {
        self.leads.read().await.get(&normalize_email(email)).cloned()
    }
}

#[async_trait]
impl LeadStore for InMemoryLeadStore {
    async fn exists(&self, email: &str) -> EngineResult<bool> {
        let leads = self.leads.read().await;
        Ok(leads.contains_key(&normalize_email(email)))
    }

    async fn create(&self, new_lead: NewLead) -> EngineResult<Lead> {
        let lead = Lead::from_registration(new_lead, Utc::now())?;

        let mut leads = self.leads.write().await;
        if leads.contains_key(&lead.email) {
            return Err(EngineError::LeadAlreadyExists { email: lead.email });
        }
        leads.insert(lead.email.clone(), lead.clone());
        debug!(lead_id = %lead.id, "Lead registered");

        Ok(lead)
    }

    async fn record_feedback(&self, email: &str, feedback: Feedback) -> EngineResult<Lead> {
        let email = normalize_email(email);

        let mut leads = self.leads.write().await;
        let lead = leads
            .get_mut(&email)
            .ok_or(EngineError::LeadNotFound { email })?;
        lead.feedback = Some(feedback);
        debug!(lead_id = %lead.id, "Feedback recorded");

        Ok(lead.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeedbackRating, SectorList};

    fn create_registration(email: &str) -> NewLead {
        NewLead {
            first_name: "Sam".to_string(),
            last_name: "Patel".to_string(),
            email: email.to_string(),
            company_name: Some("Acme Talent".to_string()),
            region: "United Kingdom".to_string(),
            telephone: Some("+44 20 7946 0000".to_string()),
            current_role: "Senior Recruiter".to_string(),
            recruitment_sectors: SectorList::List(vec!["Tech".to_string()]),
        }
    }

    fn create_feedback(rating: FeedbackRating) -> Feedback {
        Feedback {
            rating,
            comment: Some("Close to my current package".to_string()),
            salary_output: Some("£45,000".to_string()),
            recorded_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_then_exists() {
        let store = InMemoryLeadStore::new();
        assert!(!store.exists("sam@example.com").await.unwrap());

        let lead = store.create(create_registration("Sam@Example.com")).await.unwrap();

        assert_eq!(lead.email, "sam@example.com");
        assert!(store.exists("  SAM@example.COM ").await.unwrap());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = InMemoryLeadStore::new();
        store.create(create_registration("sam@example.com")).await.unwrap();

        match store.create(create_registration(" SAM@example.com")).await {
            Err(EngineError::LeadAlreadyExists { email }) => {
                assert_eq!(email, "sam@example.com")
            }
            other => panic!("Expected LeadAlreadyExists, got {:?}", other),
        }
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_invalid_registration_is_not_stored() {
        let store = InMemoryLeadStore::new();
        let mut registration = create_registration("sam@example.com");
        registration.region = String::new();

        assert!(matches!(
            store.create(registration).await,
            Err(EngineError::InvalidLead { .. })
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_feedback_replaces_previous() {
        let store = InMemoryLeadStore::new();
        store.create(create_registration("sam@example.com")).await.unwrap();

        store
            .record_feedback("sam@example.com", create_feedback(FeedbackRating::Negative))
            .await
            .unwrap();
        let lead = store
            .record_feedback("Sam@Example.com", create_feedback(FeedbackRating::Positive))
            .await
            .unwrap();

        let feedback = lead.feedback.unwrap();
        assert_eq!(feedback.rating, FeedbackRating::Positive);
        assert_eq!(feedback.salary_output.as_deref(), Some("£45,000"));
        assert_eq!(
            store.get("sam@example.com").await.unwrap().feedback.unwrap().rating,
            FeedbackRating::Positive
        );
    }

    #[tokio::test]
    async fn test_feedback_for_unknown_email() {
        let store = InMemoryLeadStore::new();

        match store
            .record_feedback("nobody@example.com", create_feedback(FeedbackRating::Positive))
            .await
        {
            Err(EngineError::LeadNotFound { email }) => assert_eq!(email, "nobody@example.com"),
            other => panic!("Expected LeadNotFound, got {:?}", other),
        }
    }
}
