use serde_derive::{Deserialize, Serialize};

/// Lifecycle stage of a notification: `Draft` while it sits in the pool,
/// `Sent` once it has been moved to the sent-notifications ledger.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Draft,
    Sent,
}
