use serde::{Deserialize, Serialize};

/// Identity attached to a request once its session token has been verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    user_id: String,
    email: String,
    role_name: Option<String>,
    session_version: i32,
}

impl UserIdentity {
    /// Creates an identity from verified token claims.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        role_name: Option<String>,
        session_version: i32,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            role_name,
            session_version,
        }
    }

    /// Returns the stable external user identifier.
    #[must_use]
    pub fn user_id(&self) -> &str {
        self.user_id.as_str()
    }

    /// Returns the email the token was issued for.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the role name carried by the token, if the user had one.
    #[must_use]
    pub fn role_name(&self) -> Option<&str> {
        self.role_name.as_deref()
    }

    /// Returns the session version stamped into the token.
    #[must_use]
    pub fn session_version(&self) -> i32 {
        self.session_version
    }
}
