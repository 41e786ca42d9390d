//! User account types and credential rules.

use inkpost_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Internal identifier of a user row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Trimmed, lower-cased email address with a minimal structural check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let normalized = value.into().trim().to_lowercase();

        if normalized.is_empty() {
            return Err(AppError::Validation("email is required".to_owned()));
        }

        if normalized.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "email must not exceed {EMAIL_MAX_LENGTH} characters"
            )));
        }

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(AppError::Validation("email must contain '@'".to_owned()));
        };

        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(AppError::Validation("email is malformed".to_owned()));
        }

        Ok(Self(normalized))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Longest accepted email address.
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Shortest accepted password.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Longest accepted password; bounds the hashing cost of a single request.
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Validates a plaintext password before it is hashed.
pub fn validate_password(password: &str) -> AppResult<()> {
    if password.is_empty() {
        return Err(AppError::Validation("password is required".to_owned()));
    }

    let char_count = password.chars().count();
    if char_count < PASSWORD_MIN_LENGTH {
        return Err(AppError::Validation(format!(
            "password must be at least {PASSWORD_MIN_LENGTH} characters"
        )));
    }

    if char_count > PASSWORD_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "password must not exceed {PASSWORD_MAX_LENGTH} characters"
        )));
    }

    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        return Err(AppError::Validation("password is too common".to_owned()));
    }

    Ok(())
}

/// Passwords rejected outright.
static COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "12345678",
    "1234567890",
    "qwerty",
    "abc123",
    "monkey",
    "master",
    "dragon",
    "111111",
    "baseball",
    "iloveyou",
    "trustno1",
    "sunshine",
    "princess",
    "football",
    "shadow",
    "superman",
    "qwerty123",
    "michael",
    "password1",
    "password123",
    "welcome",
    "login",
    "admin",
    "letmein",
    "starwars",
    "solo",
    "passw0rd",
    "121212",
    "flower",
    "hottie",
    "loveme",
    "access",
    "hello",
    "charlie",
    "donald",
    "qwertyuiop",
    "whatever",
    "654321",
    "7777777",
    "123123",
    "jordan",
    "hunter",
    "pepper",
    "buster",
    "joshua",
    "freedom",
    "1234567",
    "12345",
];

/// Whether an account may sign in. Stored as `1` (enabled) and `0` (disabled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    /// The account can sign in.
    Enabled,
    /// Sign-in is refused.
    Disabled,
}

impl AccountStatus {
    /// Returns the storage code.
    #[must_use]
    pub fn code(self) -> i16 {
        match self {
            Self::Enabled => 1,
            Self::Disabled => 0,
        }
    }

    /// Parses a storage code.
    pub fn from_code(code: i16) -> AppResult<Self> {
        match code {
            1 => Ok(Self::Enabled),
            0 => Ok(Self::Disabled),
            _ => Err(AppError::Validation(format!(
                "unknown account status '{code}'"
            ))),
        }
    }

    /// Returns whether the account may sign in.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Session version assigned to newly created accounts.
pub const INITIAL_SESSION_VERSION: i32 = 1;

/// Role key assigned to self-registered and admin-created users without an explicit role.
pub const DEFAULT_ROLE_KEY: &str = "user";
