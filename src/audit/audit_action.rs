use serde_derive::{Deserialize, Serialize};

/// Pool operation an audit log entry describes.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    SaveToPool,
    DeleteFromPool,
    SendFromPool,
}

#[cfg(test)]
mod tests {
    use super::AuditAction;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::to_string(&AuditAction::SaveToPool)?,
            r#""save_to_pool""#
        );
        assert_eq!(
            serde_json::to_string(&AuditAction::DeleteFromPool)?,
            r#""delete_from_pool""#
        );
        assert_eq!(
            serde_json::to_string(&AuditAction::SendFromPool)?,
            r#""send_from_pool""#
        );
        Ok(())
    }
}
