// src/domain/audit/entity.rs
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Append-only, court-ready record of a state-changing action. Entries are
/// written inside the same transaction as the change they document: commit
/// together, fail together.
#[derive(Debug, Clone)]
pub struct AuditLog {
    pub user_id: Option<UserId>,
    pub action: String,
    pub resource_type: String,
    pub resource_id: Option<i64>,
    pub details: serde_json::Value,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}
