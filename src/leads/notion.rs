//! Lead store backed by a Notion database.
//!
//! Each lead is one page in the database. Pages are found by their `Email`
//! property; feedback is written onto the matching page.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::NotionConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Feedback, FeedbackRating, Lead, NewLead, normalize_email};

use super::LeadStore;

/// Notion API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Request timeout for Notion calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A [`LeadStore`] that persists leads as pages of a Notion database.
pub struct NotionLeadStore {
    client: Client,
    config: NotionConfig,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    id: String,
    #[serde(default)]
    created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    properties: Value,
}

impl NotionLeadStore {
    /// Creates a store for the configured database.
    pub fn new(config: NotionConfig) -> EngineResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| store_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.config.base_url, path))
            .bearer_auth(&self.config.api_key)
            .header("Notion-Version", NOTION_VERSION)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        body: &Value,
        action: &str,
    ) -> EngineResult<T> {
        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| store_error(format!("Failed to {}: {}", action, e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%status, detail = %detail, "Notion API error");
            return Err(store_error(format!(
                "Failed to {}: Notion returned {}",
                action, status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| store_error(format!("Failed to parse {} response: {}", action, e)))
    }

    async fn find_page(&self, email: &str) -> EngineResult<Option<Page>> {
        let path = format!("/v1/databases/{}/query", self.config.database_id);
        let body = json!({
            "filter": {
                "property": "Email",
                "email": { "equals": email }
            }
        });

        let response: QueryResponse = self
            .send(self.request(Method::POST, &path), &body, "query leads")
            .await?;
        Ok(response.results.into_iter().next())
    }
}

#[async_trait]
impl LeadStore for NotionLeadStore {
    async fn exists(&self, email: &str) -> EngineResult<bool> {
        Ok(self.find_page(&normalize_email(email)).await?.is_some())
    }

    async fn create(&self, new_lead: NewLead) -> EngineResult<Lead> {
        let mut lead = Lead::from_registration(new_lead, Utc::now())?;
        if self.find_page(&lead.email).await?.is_some() {
            return Err(EngineError::LeadAlreadyExists { email: lead.email });
        }

        let body = json!({
            "parent": { "database_id": self.config.database_id },
            "properties": lead_properties(&lead),
        });
        let page: Page = self
            .send(self.request(Method::POST, "/v1/pages"), &body, "create lead")
            .await?;

        lead.id = parse_page_id(&page.id)?;
        if let Some(created_at) = page.created_time {
            lead.created_at = created_at;
        }
        debug!(lead_id = %lead.id, "Lead page created");

        Ok(lead)
    }

    async fn record_feedback(&self, email: &str, feedback: Feedback) -> EngineResult<Lead> {
        let email = normalize_email(email);
        let page = self
            .find_page(&email)
            .await?
            .ok_or(EngineError::LeadNotFound { email })?;

        let path = format!("/v1/pages/{}", page.id);
        let body = json!({ "properties": feedback_properties(&feedback) });
        let updated: Page = self
            .send(self.request(Method::PATCH, &path), &body, "record feedback")
            .await?;
        debug!(page_id = %updated.id, "Feedback written");

        page_to_lead(&updated, feedback)
    }
}

fn store_error(message: String) -> EngineError {
    EngineError::LeadStoreError { message }
}

fn parse_page_id(id: &str) -> EngineResult<Uuid> {
    Uuid::parse_str(id).map_err(|e| store_error(format!("Unexpected page id '{}': {}", id, e)))
}

fn text(content: &str) -> Value {
    json!([{ "text": { "content": content } }])
}

fn lead_properties(lead: &Lead) -> Value {
    let sectors: Vec<Value> = lead
        .recruitment_sectors
        .iter()
        .map(|name| json!({ "name": name }))
        .collect();

    let mut properties = json!({
        "First Name": { "title": text(&lead.first_name) },
        "Last Name": { "rich_text": text(&lead.last_name) },
        "Email": { "email": lead.email },
        "Company Name": { "rich_text": text(lead.company_name.as_deref().unwrap_or_default()) },
        "Location": { "select": { "name": lead.region } },
        "Current Role": { "select": { "name": lead.current_role } },
        "Recruitment Sector": { "multi_select": sectors },
    });
    if let Some(telephone) = &lead.telephone {
        properties["Telephone"] = json!({ "rich_text": text(telephone) });
    }
    properties
}

fn feedback_properties(feedback: &Feedback) -> Value {
    let rating = match feedback.rating {
        FeedbackRating::Positive => "Positive",
        FeedbackRating::Negative => "Negative",
    };

    let mut properties = json!({
        "Feedback Response": { "select": { "name": rating } },
    });
    if let Some(comment) = &feedback.comment {
        properties["Additional Feedback"] = json!({ "rich_text": text(comment) });
    }
    if let Some(salary_output) = &feedback.salary_output {
        properties["Salary Output"] = json!({ "rich_text": text(salary_output) });
    }
    properties
}

fn plain_text(properties: &Value, name: &str, kind: &str) -> String {
    properties[name][kind]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| {
                    part["plain_text"]
                        .as_str()
                        .or_else(|| part["text"]["content"].as_str())
                })
                .collect()
        })
        .unwrap_or_default()
}

fn select_name(properties: &Value, name: &str) -> String {
    properties[name]["select"]["name"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

fn page_to_lead(page: &Page, feedback: Feedback) -> EngineResult<Lead> {
    let properties = &page.properties;
    let non_empty = |value: String| Some(value).filter(|v| !v.is_empty());

    let recruitment_sectors = properties["Recruitment Sector"]["multi_select"]
        .as_array()
        .map(|options| {
            options
                .iter()
                .filter_map(|o| o["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(Lead {
        id: parse_page_id(&page.id)?,
        first_name: plain_text(properties, "First Name", "title"),
        last_name: plain_text(properties, "Last Name", "rich_text"),
        email: properties["Email"]["email"]
            .as_str()
            .map(normalize_email)
            .unwrap_or_default(),
        company_name: non_empty(plain_text(properties, "Company Name", "rich_text")),
        region: select_name(properties, "Location"),
        telephone: non_empty(plain_text(properties, "Telephone", "rich_text")),
        current_role: select_name(properties, "Current Role"),
        recruitment_sectors,
        created_at: page.created_time.unwrap_or(feedback.recorded_at),
        feedback: Some(feedback),
    })
}
