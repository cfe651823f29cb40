use serde_derive::{Deserialize, Serialize};

/// Identity of the user on whose behalf a pool operation is performed. Supplied
/// by the authentication collaborator; only `id` is guaranteed to be present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique id of the user.
    pub id: String,
    /// Display name of the user, if known.
    pub name: Option<String>,
    /// Role of the user (e.g. "admin", "staff", "student"), if known.
    pub role: Option<String>,
}

impl User {
    /// Sentinel id recorded when no user identity is provided.
    pub const SYSTEM_ID: &'static str = "system";
    /// Sentinel name recorded when the acting user has no name.
    pub const SYSTEM_NAME: &'static str = "System";
    /// Sentinel role recorded when the acting user has no role.
    pub const SYSTEM_ROLE: &'static str = "system";

    /// Creates a new user identity with the specified id.
    pub fn new<I: Into<String>>(id: I) -> Self {
        Self {
            id: id.into(),
            name: None,
            role: None,
        }
    }

    /// Returns the sentinel identity used whenever no user is provided.
    pub fn system() -> Self {
        Self {
            id: Self::SYSTEM_ID.to_string(),
            name: Some(Self::SYSTEM_NAME.to_string()),
            role: Some(Self::SYSTEM_ROLE.to_string()),
        }
    }
}

impl AsRef<User> for User {
    fn as_ref(&self) -> &User {
        self
    }
}
