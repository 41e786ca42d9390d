//! Session token port.

use chrono::{DateTime, Utc};

use inkpost_core::{AppResult, UserIdentity};

/// A freshly minted session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSessionToken {
    /// Compact signed token.
    pub token: String,
    /// Moment the token stops verifying.
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies signed session tokens.
///
/// Verification failures of any kind (bad signature, malformed input,
/// expiry) are reported as `None`.
pub trait SessionTokenCodec: Send + Sync {
    /// Mints a token carrying the identity claims.
    fn issue(&self, identity: &UserIdentity) -> AppResult<IssuedSessionToken>;

    /// Verifies a token and returns the claims it carries.
    fn verify(&self, token: &str) -> Option<UserIdentity>;
}
