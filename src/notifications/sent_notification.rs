use crate::notifications::{NotificationDraft, NotificationStatus};
use serde_derive::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A notification that has completed `send_from_pool` and now lives in the
/// sent-notifications ledger.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SentNotification {
    #[serde(flatten)]
    pub notification: NotificationDraft,
    /// The time at which the notification was sent, in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub sent_at: OffsetDateTime,
    /// Id of the user that sent the notification.
    pub sent_by: String,
}

impl SentNotification {
    /// Creates a ledger entry out of a pool draft, stamping it as sent.
    pub fn new<I: Into<String>>(
        mut notification: NotificationDraft,
        sent_at: OffsetDateTime,
        sent_by: I,
    ) -> Self {
        notification.status = NotificationStatus::Sent;
        Self {
            notification,
            sent_at,
            sent_by: sent_by.into(),
        }
    }
}
