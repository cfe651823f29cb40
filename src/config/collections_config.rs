use serde_derive::{Deserialize, Serialize};

/// Well-known names of the persisted collections.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CollectionsConfig {
    /// Name of the collection draft notifications are pooled in.
    pub pool: String,
    /// Name of the ledger collection sent notifications are moved to.
    pub sent: String,
    /// Name of the append-only audit log collection.
    pub audit_log: String,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self {
            pool: "notification_pool".to_string(),
            sent: "sent_notifications".to_string(),
            audit_log: "notification_audit_logs".to_string(),
        }
    }
}
