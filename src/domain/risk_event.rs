// Risk event domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::Critical, Severity::High, Severity::Medium, Severity::Low];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Pending,
    Acknowledged,
    Resolved,
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [EventStatus::Pending, EventStatus::Acknowledged, EventStatus::Resolved];
}

/// A synthesized historical incident for one fleet unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEvent {
    pub id: String,
    pub robot_id: String,
    pub robot_name: String,
    pub group: String,
    pub message: String,
    pub reason: &'static str,
    pub severity: Severity,
    pub risk_score: u8,
    pub current_value: u8,
    pub status: EventStatus,
    #[serde(serialize_with = "timestamp::serialize")]
    pub triggered_at: DateTime<Utc>,
}
