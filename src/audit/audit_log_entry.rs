use crate::audit::{AuditAction, AuditResult};
use serde_derive::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single entry of the append-only audit log. One entry is written for every
/// attempted pool mutation, whether it succeeded or failed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    /// Unique id of the entry.
    pub id: String,
    /// The time at which the entry was logged, in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// The pool operation that was attempted.
    pub action: AuditAction,
    /// Id of the acted-upon notification, if one was targeted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,
    /// Title of the acted-upon notification. Absent when the operation targeted
    /// an id that was not in the pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_title: Option<String>,
    /// Id of the acting user, or the "system" sentinel.
    pub user_id: String,
    /// Name of the acting user, or the "System" sentinel.
    pub user_name: String,
    /// Role of the acting user, or the "system" sentinel.
    pub user_role: String,
    /// Whether the operation succeeded.
    pub result: AuditResult,
    /// Description of the failure, present only when `result` is `Error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
