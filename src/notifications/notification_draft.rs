use crate::notifications::NotificationStatus;
use serde_derive::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Consumer-provided fields of a notification. This is what UI forms construct
/// and what the validator inspects; the pool adds the service-assigned fields
/// when the draft is accepted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDraftParams {
    /// Short human-readable title, at most 100 characters.
    pub title: String,
    /// Body of the notification, at most 2000 characters.
    pub message: String,
    /// Free-form category tag, e.g. "exam", "fee" or "general".
    #[serde(rename = "type")]
    pub notification_type: String,
    /// Target audience: "students", "staff", "admin" or "all".
    pub audience: String,
    /// Departments the notification is addressed to. Must be non-empty when the
    /// audience is "students".
    #[serde(default)]
    pub departments: Vec<String>,
    /// Classes further narrowing `departments`.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Priority of the notification: "low", "normal", "high" or "urgent".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Either "immediate" or "scheduled".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_type: Option<String>,
    /// Scheduled calendar date (`YYYY-MM-DD`), required for scheduled delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    /// Scheduled time of day (`HH:MM`), required for scheduled delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    /// Estimated number of recipients. A draft can be saved without it, but
    /// cannot be sent unless it is greater than zero.
    #[serde(alias = "estimatedRecipients", skip_serializing_if = "Option::is_none")]
    pub recipient_count: Option<u32>,
}

/// A notification saved to the pool: the consumer-provided fields plus the
/// fields assigned by the pool service at save time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDraft {
    /// Unique id of the notification.
    pub id: String,
    #[serde(flatten)]
    pub params: NotificationDraftParams,
    /// The time at which the draft was saved to the pool, in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Id of the user that saved the draft.
    pub created_by: String,
    /// Always `Draft` while the notification is in the pool.
    pub status: NotificationStatus,
}

impl NotificationDraft {
    /// Creates a new pool entry from the consumer-provided fields.
    pub fn new<I: Into<String>>(
        id: I,
        params: NotificationDraftParams,
        created_at: OffsetDateTime,
        created_by: I,
    ) -> Self {
        Self {
            id: id.into(),
            params,
            created_at,
            created_by: created_by.into(),
            status: NotificationStatus::Draft,
        }
    }
}
