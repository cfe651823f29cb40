#![deny(warnings)]

mod api;
mod audit;
mod config;
mod datastore;
mod error;
mod notifications;
mod users;

pub use self::{
    api::Api,
    audit::{AuditAction, AuditApi, AuditLogEntry, AuditResult, TimePeriod},
    config::{CollectionsConfig, Config, RawConfig},
    datastore::{CollectionStore, Datastore, FileStore, MemoryStore, Snapshot},
    error::Error,
    notifications::{
        NotificationDraft, NotificationDraftParams, NotificationStatus, NotificationsApi,
        SentNotification, ValidationOutcome, validate, validate_for_pool, validate_for_sending,
    },
    users::User,
};
