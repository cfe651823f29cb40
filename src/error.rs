/// Campus-notify native error type. Pool operations surface every failure
/// through one of these variants so that consumers can branch on the kind of
/// failure instead of inspecting error messages.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The candidate notification was rejected by the validator. Carries every
    /// violated rule, in the order the rules are evaluated.
    #[error("Validation failed: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),
    /// The operation referenced a notification id that is not in the pool.
    #[error("Notification not found in pool")]
    NotFoundInPool,
    /// A persisted collection could not be read or written.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl Error {
    /// Returns the list of violated validation rules, if the error originated
    /// from a validator rejection.
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            Error::ValidationFailed(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use anyhow::anyhow;

    #[test]
    fn validation_failed_message_joins_errors() {
        let error = Error::ValidationFailed(vec![
            "Title is required".to_string(),
            "Message is required".to_string(),
        ]);
        assert_eq!(
            error.to_string(),
            "Validation failed: Title is required, Message is required"
        );
        assert_eq!(
            error.validation_errors(),
            Some(
                &[
                    "Title is required".to_string(),
                    "Message is required".to_string()
                ][..]
            )
        );
    }

    #[test]
    fn not_found_message() {
        let error = Error::NotFoundInPool;
        assert_eq!(error.to_string(), "Notification not found in pool");
        assert!(error.validation_errors().is_none());
    }

    #[test]
    fn storage_error_preserves_root_cause() {
        let error = Error::from(anyhow!("disk is full"));
        assert_eq!(error.to_string(), "disk is full");
        assert!(error.validation_errors().is_none());
    }
}
