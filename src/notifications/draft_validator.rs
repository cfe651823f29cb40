use crate::notifications::NotificationDraftParams;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, macros::format_description};

/// Audience value that requires at least one department to be selected.
const AUDIENCE_STUDENTS: &str = "students";

/// Schedule type value that requires an explicit future date and time.
const SCHEDULE_TYPE_SCHEDULED: &str = "scheduled";

/// The closed set of priority values a notification may carry.
const KNOWN_PRIORITIES: [&str; 4] = ["low", "normal", "high", "urgent"];

const MAX_TITLE_LENGTH: usize = 100;
const MAX_MESSAGE_LENGTH: usize = 2000;

/// Verdict of a validation check: whether the candidate passed, and every
/// violated rule in evaluation order if it did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl From<Vec<String>> for ValidationOutcome {
    fn from(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Checks a candidate notification against the base rule set. All applicable
/// violations are accumulated, not short-circuited on the first failure.
pub fn validate(candidate: &NotificationDraftParams) -> ValidationOutcome {
    let mut errors = vec![];

    if candidate.title.trim().is_empty() {
        errors.push("Title is required".to_string());
    } else if candidate.title.chars().count() > MAX_TITLE_LENGTH {
        errors.push(format!("Title must be {MAX_TITLE_LENGTH} characters or less"));
    }

    if candidate.message.trim().is_empty() {
        errors.push("Message is required".to_string());
    } else if candidate.message.chars().count() > MAX_MESSAGE_LENGTH {
        errors.push(format!(
            "Message must be {MAX_MESSAGE_LENGTH} characters or less"
        ));
    }

    if candidate.notification_type.trim().is_empty() {
        errors.push("Notification type is required".to_string());
    }

    if candidate.audience.trim().is_empty() {
        errors.push("Audience is required".to_string());
    }

    if candidate.audience == AUDIENCE_STUDENTS && candidate.departments.is_empty() {
        errors.push("At least one department must be selected for student notifications".to_string());
    }

    if candidate.schedule_type.as_deref() == Some(SCHEDULE_TYPE_SCHEDULED) {
        let scheduled_date = candidate.scheduled_date.as_deref().unwrap_or_default();
        let scheduled_time = candidate.scheduled_time.as_deref().unwrap_or_default();
        if scheduled_date.is_empty() {
            errors.push("Scheduled date is required".to_string());
        }
        if scheduled_time.is_empty() {
            errors.push("Scheduled time is required".to_string());
        }

        if !scheduled_date.is_empty() && !scheduled_time.is_empty() {
            match parse_scheduled_at(scheduled_date, scheduled_time) {
                Some(scheduled_at) if scheduled_at > OffsetDateTime::now_utc() => {}
                Some(_) => {
                    errors.push("Scheduled date and time must be in the future".to_string());
                }
                None => {
                    errors.push("Scheduled date and time must be a valid date and time".to_string());
                }
            }
        }
    }

    if let Some(ref priority) = candidate.priority {
        if !KNOWN_PRIORITIES.contains(&priority.as_str()) {
            errors.push(format!(
                "Priority must be one of: {}",
                KNOWN_PRIORITIES.join(", ")
            ));
        }
    }

    errors.into()
}

/// Checks whether a candidate notification can be saved to the pool. Currently
/// the base rule set is the only requirement; save-time-only rules belong here.
pub fn validate_for_pool(candidate: &NotificationDraftParams) -> ValidationOutcome {
    validate(candidate)
}

/// Checks whether a candidate notification can be sent. On top of the base rule
/// set the notification must have a positive recipient estimate, so that an
/// incomplete draft can be saved for later but never dispatched to nobody.
pub fn validate_for_sending(candidate: &NotificationDraftParams) -> ValidationOutcome {
    let outcome = validate(candidate);
    if !outcome.is_valid {
        return outcome;
    }

    let mut errors = outcome.errors;
    if !candidate.recipient_count.is_some_and(|count| count > 0) {
        errors.push("Notification must have at least one recipient".to_string());
    }

    errors.into()
}

fn parse_scheduled_at(scheduled_date: &str, scheduled_time: &str) -> Option<OffsetDateTime> {
    let date = Date::parse(scheduled_date, format_description!("[year]-[month]-[day]")).ok()?;
    let time = Time::parse(scheduled_time, format_description!("[hour]:[minute]")).ok()?;
    Some(PrimitiveDateTime::new(date, time).assume_utc())
}
