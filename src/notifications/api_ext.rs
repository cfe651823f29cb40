use crate::{
    api::Api,
    audit::AuditAction,
    datastore::CollectionStore,
    error::Error,
    notifications::{
        NotificationDraft, NotificationDraftParams, SentNotification, validate_for_pool,
        validate_for_sending,
    },
    users::User,
};
use time::OffsetDateTime;
use uuid::Uuid;

/// Describes the API to work with the notification pool: the save/send/delete
/// workflow for draft notifications. Every mutation runs inside a snapshot
/// transaction over the collections it may touch and leaves exactly one audit
/// log entry behind, whether it succeeds or fails.
pub struct NotificationsApi<'a, CS: CollectionStore> {
    api: &'a Api<CS>,
}

impl<'a, CS: CollectionStore> NotificationsApi<'a, CS> {
    /// Creates Notifications API.
    pub fn new(api: &'a Api<CS>) -> Self {
        Self { api }
    }

    /// Validates a candidate notification and saves it to the pool as a draft,
    /// assigning the id, creation timestamp, creator and `Draft` status.
    pub async fn save_to_pool(
        &self,
        params: NotificationDraftParams,
        user: Option<&User>,
    ) -> Result<NotificationDraft, Error> {
        let title = params.title.clone();
        let result = self.in_transaction(&[self.pool_collection()], || {
            let outcome = validate_for_pool(&params);
            if !outcome.is_valid {
                return Err(Error::ValidationFailed(outcome.errors));
            }

            let draft = NotificationDraft::new(
                Uuid::new_v4().to_string(),
                params,
                OffsetDateTime::now_utc(),
                user.map_or_else(|| User::SYSTEM_ID.to_string(), |user| user.id.clone()),
            );

            let mut pool: Vec<NotificationDraft> =
                self.api.datastore.get_collection(self.pool_collection())?;
            pool.insert(0, draft.clone());
            self.api
                .datastore
                .set_collection(self.pool_collection(), &pool)?;

            Ok(draft)
        });

        match &result {
            Ok(draft) => {
                self.api.audit().log_action(
                    AuditAction::SaveToPool,
                    Some(&draft.id),
                    Some(&draft.params.title),
                    user,
                    None,
                );
            }
            Err(err) => {
                self.api.audit().log_action(
                    AuditAction::SaveToPool,
                    None,
                    Some(&title),
                    user,
                    Some(&err.to_string()),
                );
            }
        }

        result
    }

    /// Retrieves the pooled drafts, newest first. A pool that cannot be read is
    /// reported to the diagnostic channel and treated as empty.
    pub fn get_pool(&self) -> Vec<NotificationDraft> {
        self.read_tolerantly(self.pool_collection())
    }

    /// Removes a draft from the pool. The sent-notifications ledger is never
    /// affected.
    pub async fn delete_from_pool(
        &self,
        notification_id: &str,
        user: Option<&User>,
    ) -> Result<(), Error> {
        let result = self.in_transaction(&[self.pool_collection()], || {
            let mut pool: Vec<NotificationDraft> =
                self.api.datastore.get_collection(self.pool_collection())?;
            let index = pool
                .iter()
                .position(|draft| draft.id == notification_id)
                .ok_or(Error::NotFoundInPool)?;

            let draft = pool.remove(index);
            self.api
                .datastore
                .set_collection(self.pool_collection(), &pool)?;

            Ok(draft)
        });

        let (title, error_message) = match &result {
            Ok(draft) => (Some(draft.params.title.clone()), None),
            Err(err) => (self.find_pooled_title(notification_id), Some(err.to_string())),
        };
        self.api.audit().log_action(
            AuditAction::DeleteFromPool,
            Some(notification_id),
            title.as_deref(),
            user,
            error_message.as_deref(),
        );

        result.map(|_| ())
    }

    /// Re-validates a pooled draft with the sending rule set and, if it passes,
    /// atomically moves it out of the pool into the sent-notifications ledger.
    pub async fn send_from_pool(
        &self,
        notification_id: &str,
        user: Option<&User>,
    ) -> Result<SentNotification, Error> {
        let collections = [self.pool_collection(), self.sent_collection()];
        let result = self.in_transaction(&collections, || {
            let mut pool: Vec<NotificationDraft> =
                self.api.datastore.get_collection(self.pool_collection())?;
            let index = pool
                .iter()
                .position(|draft| draft.id == notification_id)
                .ok_or(Error::NotFoundInPool)?;

            // The stored draft is re-validated rather than trusted: a draft that
            // was valid to save may have become stale, e.g. its scheduled time
            // has lapsed.
            let outcome = validate_for_sending(&pool[index].params);
            if !outcome.is_valid {
                return Err(Error::ValidationFailed(outcome.errors));
            }

            let sent = SentNotification::new(
                pool.remove(index),
                OffsetDateTime::now_utc(),
                user.map_or_else(|| User::SYSTEM_ID.to_string(), |user| user.id.clone()),
            );

            let mut ledger: Vec<SentNotification> =
                self.api.datastore.get_collection(self.sent_collection())?;
            ledger.insert(0, sent.clone());
            self.api
                .datastore
                .set_collection(self.sent_collection(), &ledger)?;
            self.api
                .datastore
                .set_collection(self.pool_collection(), &pool)?;

            Ok(sent)
        });

        let (title, error_message) = match &result {
            Ok(sent) => (Some(sent.notification.params.title.clone()), None),
            Err(err) => (self.find_pooled_title(notification_id), Some(err.to_string())),
        };
        self.api.audit().log_action(
            AuditAction::SendFromPool,
            Some(notification_id),
            title.as_deref(),
            user,
            error_message.as_deref(),
        );

        result
    }

    /// Retrieves the sent-notifications ledger, newest first, with the same
    /// read tolerance as `get_pool`.
    pub fn get_sent_notifications(&self) -> Vec<SentNotification> {
        self.read_tolerantly(self.sent_collection())
    }

    /// Runs a mutation inside the snapshot envelope: the serialized state of
    /// every collection the mutation may touch is captured up front, and any
    /// failure after that point restores it byte for byte.
    fn in_transaction<T>(
        &self,
        collections: &[&str],
        mutation: impl FnOnce() -> Result<T, Error>,
    ) -> Result<T, Error> {
        let snapshot = self
            .api
            .datastore
            .begin_transaction(collections)
            .map_err(Error::Storage)?;

        match mutation() {
            Ok(value) => {
                self.api.datastore.commit(snapshot);
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.api.datastore.rollback(&snapshot) {
                    tracing::error!(
                        "Failed to roll back collections {collections:?}: {rollback_err:?}"
                    );
                }
                Err(err)
            }
        }
    }

    fn read_tolerantly<T: serde::de::DeserializeOwned>(&self, collection: &str) -> Vec<T> {
        self.api
            .datastore
            .get_collection(collection)
            .unwrap_or_else(|err| {
                tracing::error!("Failed to read `{collection}` collection: {err:?}");
                vec![]
            })
    }

    fn find_pooled_title(&self, notification_id: &str) -> Option<String> {
        self.get_pool()
            .into_iter()
            .find(|draft| draft.id == notification_id)
            .map(|draft| draft.params.title)
    }

    fn pool_collection(&self) -> &'a str {
        self.api.config.collections.pool.as_str()
    }

    fn sent_collection(&self) -> &'a str {
        self.api.config.collections.sent.as_str()
    }
}

impl<CS: CollectionStore> Api<CS> {
    /// Returns an API to work with the notification pool.
    pub fn notifications(&self) -> NotificationsApi<'_, CS> {
        NotificationsApi::new(self)
    }
}
