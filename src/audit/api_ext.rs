use crate::{
    api::Api,
    audit::{AuditAction, AuditLogEntry, AuditResult, TimePeriod},
    datastore::CollectionStore,
    users::User,
};
use time::OffsetDateTime;
use uuid::Uuid;

/// Describes the API to work with the audit log.
pub struct AuditApi<'a, CS: CollectionStore> {
    api: &'a Api<CS>,
}

impl<'a, CS: CollectionStore> AuditApi<'a, CS> {
    /// Creates Audit API.
    pub fn new(api: &'a Api<CS>) -> Self {
        Self { api }
    }

    /// Appends an entry describing an attempted pool operation and returns it.
    /// Never fails: audit logging must not abort the operation it describes, so
    /// a storage problem is only reported to the diagnostic channel.
    pub fn log_action(
        &self,
        action: AuditAction,
        notification_id: Option<&str>,
        notification_title: Option<&str>,
        user: Option<&User>,
        error_message: Option<&str>,
    ) -> AuditLogEntry {
        let entry = AuditLogEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: OffsetDateTime::now_utc(),
            action,
            notification_id: notification_id.map(ToString::to_string),
            notification_title: notification_title.map(ToString::to_string),
            user_id: user.map_or_else(|| User::SYSTEM_ID.to_string(), |user| user.id.clone()),
            user_name: user
                .and_then(|user| user.name.clone())
                .unwrap_or_else(|| User::SYSTEM_NAME.to_string()),
            user_role: user
                .and_then(|user| user.role.clone())
                .unwrap_or_else(|| User::SYSTEM_ROLE.to_string()),
            result: if error_message.is_some() {
                AuditResult::Error
            } else {
                AuditResult::Success
            },
            error_message: error_message.map(ToString::to_string),
        };

        let collection = self.api.config.collections.audit_log.as_str();
        let mut entries = self.read_all();
        entries.insert(0, entry.clone());
        if let Err(err) = self.api.datastore.set_collection(collection, &entries) {
            tracing::error!("Failed to append audit log entry: {err:?}");
        }

        entry
    }

    /// Retrieves audit log entries, newest first, optionally narrowed to an
    /// inclusive timestamp range.
    pub fn get_all_logs(
        &self,
        start: Option<OffsetDateTime>,
        end: Option<OffsetDateTime>,
    ) -> Vec<AuditLogEntry> {
        self.read_all()
            .into_iter()
            .filter(|entry| {
                start.is_none_or(|start| entry.timestamp >= start)
                    && end.is_none_or(|end| entry.timestamp <= end)
            })
            .collect()
    }

    /// Retrieves the audit log entries describing operations on the specified
    /// notification.
    pub fn get_logs_by_notification_id(&self, notification_id: &str) -> Vec<AuditLogEntry> {
        self.read_all()
            .into_iter()
            .filter(|entry| entry.notification_id.as_deref() == Some(notification_id))
            .collect()
    }

    /// Retrieves the audit log entries describing operations performed by the
    /// specified user.
    pub fn get_logs_by_user_id(&self, user_id: &str) -> Vec<AuditLogEntry> {
        self.read_all()
            .into_iter()
            .filter(|entry| entry.user_id == user_id)
            .collect()
    }

    /// Retrieves the audit log entries describing the specified operation.
    pub fn get_logs_by_action(&self, action: AuditAction) -> Vec<AuditLogEntry> {
        self.read_all()
            .into_iter()
            .filter(|entry| entry.action == action)
            .collect()
    }

    /// Retrieves the audit log entries recorded within the specified period.
    pub fn get_logs_by_time_period(&self, period: TimePeriod) -> Vec<AuditLogEntry> {
        self.get_all_logs(Some(period.start_from(OffsetDateTime::now_utc())), None)
    }

    /// Removes every audit log entry.
    pub fn clear_all_logs(&self) -> anyhow::Result<()> {
        self.api
            .datastore
            .remove_collection(self.api.config.collections.audit_log.as_str())
    }

    fn read_all(&self) -> Vec<AuditLogEntry> {
        let collection = self.api.config.collections.audit_log.as_str();
        self.api
            .datastore
            .get_collection(collection)
            .unwrap_or_else(|err| {
                tracing::error!("Failed to read `{collection}` collection: {err:?}");
                vec![]
            })
    }
}

impl<CS: CollectionStore> Api<CS> {
    /// Returns an API to work with the audit log.
    pub fn audit(&self) -> AuditApi<'_, CS> {
        AuditApi::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        audit::{AuditAction, AuditResult, TimePeriod},
        tests::{mock_api, mock_user},
        users::User,
    };
    use time::{Duration, OffsetDateTime};

    #[test]
    fn logs_success_and_error_entries() {
        let api = mock_api();
        let audit = api.audit();
        let user = mock_user();

        let entry = audit.log_action(
            AuditAction::SaveToPool,
            Some("n-1"),
            Some("Exam Notice"),
            Some(&user),
            None,
        );
        assert_eq!(entry.action, AuditAction::SaveToPool);
        assert_eq!(entry.result, AuditResult::Success);
        assert_eq!(entry.notification_id.as_deref(), Some("n-1"));
        assert_eq!(entry.notification_title.as_deref(), Some("Exam Notice"));
        assert_eq!(entry.user_id, user.id);
        assert!(entry.error_message.is_none());

        let entry = audit.log_action(
            AuditAction::DeleteFromPool,
            Some("n-2"),
            None,
            Some(&user),
            Some("Notification not found in pool"),
        );
        assert_eq!(entry.result, AuditResult::Error);
        assert_eq!(
            entry.error_message.as_deref(),
            Some("Notification not found in pool")
        );

        // Newest first.
        let logs = audit.get_all_logs(None, None);
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].action, AuditAction::DeleteFromPool);
        assert_eq!(logs[1].action, AuditAction::SaveToPool);
    }

    #[test]
    fn falls_back_to_system_identity() {
        let api = mock_api();

        let entry = api
            .audit()
            .log_action(AuditAction::SaveToPool, None, None, None, None);
        assert_eq!(entry.user_id, User::SYSTEM_ID);
        assert_eq!(entry.user_name, User::SYSTEM_NAME);
        assert_eq!(entry.user_role, User::SYSTEM_ROLE);

        // A partially known identity falls back field by field.
        let entry = api.audit().log_action(
            AuditAction::SaveToPool,
            None,
            None,
            Some(&User::new("staff-7")),
            None,
        );
        assert_eq!(entry.user_id, "staff-7");
        assert_eq!(entry.user_name, User::SYSTEM_NAME);
        assert_eq!(entry.user_role, User::SYSTEM_ROLE);
    }

    #[test]
    fn filters_logs_by_timestamp_range() {
        let api = mock_api();
        let audit = api.audit();

        audit.log_action(AuditAction::SaveToPool, Some("n-1"), None, None, None);
        audit.log_action(AuditAction::SendFromPool, Some("n-1"), None, None, None);

        let now = OffsetDateTime::now_utc();
        assert_eq!(
            audit
                .get_all_logs(Some(now - Duration::minutes(1)), Some(now))
                .len(),
            2
        );
        assert!(
            audit
                .get_all_logs(Some(now + Duration::minutes(1)), None)
                .is_empty()
        );
        assert!(
            audit
                .get_all_logs(None, Some(now - Duration::minutes(1)))
                .is_empty()
        );
    }

    #[test]
    fn filters_logs_by_notification_user_and_action() {
        let api = mock_api();
        let audit = api.audit();
        let user = mock_user();

        audit.log_action(AuditAction::SaveToPool, Some("n-1"), None, Some(&user), None);
        audit.log_action(AuditAction::SendFromPool, Some("n-1"), None, Some(&user), None);
        audit.log_action(AuditAction::SaveToPool, Some("n-2"), None, None, None);

        assert_eq!(audit.get_logs_by_notification_id("n-1").len(), 2);
        assert_eq!(audit.get_logs_by_notification_id("n-2").len(), 1);
        assert!(audit.get_logs_by_notification_id("n-3").is_empty());

        assert_eq!(audit.get_logs_by_user_id(&user.id).len(), 2);
        assert_eq!(audit.get_logs_by_user_id(User::SYSTEM_ID).len(), 1);

        assert_eq!(audit.get_logs_by_action(AuditAction::SaveToPool).len(), 2);
        assert_eq!(audit.get_logs_by_action(AuditAction::SendFromPool).len(), 1);
        assert!(
            audit
                .get_logs_by_action(AuditAction::DeleteFromPool)
                .is_empty()
        );
    }

    #[test]
    fn recent_entries_are_within_every_time_period() {
        let api = mock_api();
        let audit = api.audit();

        audit.log_action(AuditAction::SaveToPool, Some("n-1"), None, None, None);

        for period in [TimePeriod::Today, TimePeriod::Week, TimePeriod::Month] {
            assert_eq!(audit.get_logs_by_time_period(period).len(), 1);
        }
    }

    #[test]
    fn clear_all_logs_wipes_the_collection() -> anyhow::Result<()> {
        let api = mock_api();
        let audit = api.audit();

        audit.log_action(AuditAction::SaveToPool, Some("n-1"), None, None, None);
        assert_eq!(audit.get_all_logs(None, None).len(), 1);

        audit.clear_all_logs()?;
        assert!(audit.get_all_logs(None, None).is_empty());

        Ok(())
    }
}
