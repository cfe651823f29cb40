mod api_ext;
mod draft_validator;
mod notification_draft;
mod notification_status;
mod sent_notification;

pub use self::{
    api_ext::NotificationsApi,
    draft_validator::{ValidationOutcome, validate, validate_for_pool, validate_for_sending},
    notification_draft::{NotificationDraft, NotificationDraftParams},
    notification_status::NotificationStatus,
    sent_notification::SentNotification,
};
