use serde_derive::{Deserialize, Serialize};

/// Outcome of the pool operation an audit log entry describes.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuditResult {
    Success,
    Error,
}
