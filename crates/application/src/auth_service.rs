//! Registration, login, logout and per-request token authentication.
//!
//! Every login and logout increments the account's session version. A token
//! only authenticates while the version it carries matches the stored one,
//! so each account has at most one live session.

use std::sync::Arc;

use inkpost_core::{AppError, AppResult, UserIdentity};
use inkpost_domain::{AccountStatus, EmailAddress, UserId, validate_password};

use crate::user_keys::{allocate_user_key, default_role_key};
use crate::{
    IssuedSessionToken, NewUser, PasswordHasher, RoleRepository, SessionTokenCodec, UserProfile,
    UserRecord, UserRepository,
};

mod login;
mod registration;
mod session;


/// Message returned for every failed credential check.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid email or password";

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Token minted for the new session.
    pub session: IssuedSessionToken,
    /// The signed-in user, carrying the new session version.
    pub user: UserRecord,
}

/// Input for self-service registration.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    /// Email address for the new account.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Application service for credentials and sessions.
#[derive(Clone)]
pub struct AuthService {
    user_repository: Arc<dyn UserRepository>,
    role_repository: Arc<dyn RoleRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_codec: Arc<dyn SessionTokenCodec>,
}

impl AuthService {
    /// Creates a new auth service.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        role_repository: Arc<dyn RoleRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_codec: Arc<dyn SessionTokenCodec>,
    ) -> Self {
        Self {
            user_repository,
            role_repository,
            password_hasher,
            token_codec,
        }
    }
}
