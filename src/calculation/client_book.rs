//! Client-book multiplier.

use crate::models::{AuditStep, MetricType};

/// Multiplier for a candidate who brings clients.
pub const CLIENT_BOOK_MULTIPLIER: f64 = 1.05;

/// Multiplier for a candidate who brings clients and bills above threshold.
pub const CLIENT_BOOK_ABOVE_THRESHOLD_MULTIPLIER: f64 = 1.1;

/// The result of the client-book calculation.
#[derive(Debug, Clone)]
pub struct ClientBookResult {
    /// The multiplier: 1.0, 1.05 or 1.1.
    pub multiplier: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the client-book multiplier.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::client_book_multiplier;
/// use salary_engine::models::MetricType;
///
/// assert_eq!(client_book_multiplier(false, MetricType::Billings, 2e6, 1e6), 1.0);
/// assert_eq!(client_book_multiplier(true, MetricType::Placements, 0.0, 1e6), 1.05);
/// assert_eq!(client_book_multiplier(true, MetricType::Billings, 2e6, 1e6), 1.1);
/// ```
pub fn client_book_multiplier(
    has_clients: bool,
    metric_type: MetricType,
    annual_billings: f64,
    threshold: f64,
) -> f64 {
    if !has_clients {
        1.0
    } else if metric_type == MetricType::Billings && annual_billings > threshold {
        CLIENT_BOOK_ABOVE_THRESHOLD_MULTIPLIER
    } else {
        CLIENT_BOOK_MULTIPLIER
    }
}

/// Computes the client-book multiplier and records it.
pub fn calculate_client_book_multiplier(
    has_clients: bool,
    metric_type: MetricType,
    annual_billings: f64,
    threshold: f64,
    step_number: u32,
) -> ClientBookResult {
    let multiplier = client_book_multiplier(has_clients, metric_type, annual_billings, threshold);

    let reasoning = if !has_clients {
        "No client book".to_string()
    } else if multiplier == CLIENT_BOOK_ABOVE_THRESHOLD_MULTIPLIER {
        format!(
            "Client book with billings {} above threshold {}: x {}",
            annual_billings, threshold, multiplier
        )
    } else {
        format!("Client book: x {}", multiplier)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "client_book".to_string(),
        rule_name: "Client Book Multiplier".to_string(),
        input: serde_json::json!({
            "has_clients": has_clients,
            "metric_type": metric_type.as_str(),
            "annual_billings": annual_billings,
            "billings_threshold": threshold
        }),
        output: serde_json::json!({
            "client_book_multiplier": multiplier
        }),
        reasoning,
    };

    ClientBookResult {
        multiplier,
        audit_step,
    }
}
