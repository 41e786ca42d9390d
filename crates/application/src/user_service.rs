//! Administrative user management.

use std::sync::Arc;

use inkpost_core::{AppError, AppResult};
use inkpost_domain::{AccountStatus, EmailAddress, UserId, validate_password};

use crate::user_keys::{allocate_user_key, default_role_key};
use crate::{
    NewUser, OrganizationRepository, PasswordHasher, RoleRepository, UserProfile, UserRecord,
    UserRepository,
};

mod admin;

#[cfg(test)]
mod tests;

/// Input for creating a user from the administration screens.
#[derive(Debug, Clone, Default)]
pub struct CreateUserInput {
    /// External id; derived from the email when absent.
    pub user_id: Option<String>,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Role key; the default role is used when absent.
    pub role_id: Option<String>,
    /// Organization key.
    pub org_id: Option<String>,
    /// Profile fields.
    pub profile: UserProfile,
    /// Initial status, enabled when absent.
    pub status: Option<AccountStatus>,
}

/// Partial update of a user. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    /// New email address.
    pub email: Option<String>,
    /// New plaintext password; empty values are ignored.
    pub password: Option<String>,
    /// New role key.
    pub role_id: Option<String>,
    /// New organization key.
    pub org_id: Option<String>,
    /// Profile fields to change.
    pub profile: UserProfile,
    /// New account status.
    pub status: Option<AccountStatus>,
}

/// Application service for user administration.
#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    role_repository: Arc<dyn RoleRepository>,
    organization_repository: Arc<dyn OrganizationRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    /// Creates a new user service.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        role_repository: Arc<dyn RoleRepository>,
        organization_repository: Arc<dyn OrganizationRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repository,
            role_repository,
            organization_repository,
            password_hasher,
        }
    }

    /// Lists every user.
    pub async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        self.user_repository.list_users().await
    }

    /// Searches users by email or name. A blank keyword lists everyone.
    pub async fn search_users(&self, keyword: Option<&str>) -> AppResult<Vec<UserRecord>> {
        match keyword.map(str::trim).filter(|keyword| !keyword.is_empty()) {
            Some(keyword) => self.user_repository.search_users(keyword).await,
            None => self.user_repository.list_users().await,
        }
    }

    /// Returns a user by internal id.
    pub async fn get_user(&self, id: UserId) -> AppResult<UserRecord> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{id}' does not exist")))
    }

    /// Returns a user by external id.
    pub async fn get_user_by_user_id(&self, user_id: &str) -> AppResult<UserRecord> {
        self.user_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' does not exist")))
    }

    async fn require_role(&self, role_id: &str) -> AppResult<String> {
        self.role_repository
            .find_role_by_key(role_id)
            .await?
            .map(|role| role.role_id)
            .ok_or_else(|| AppError::Validation("invalid role".to_owned()))
    }

    async fn resolve_organization(&self, org_id: &str) -> AppResult<Option<(String, String)>> {
        Ok(self
            .organization_repository
            .find_organization_by_key(org_id)
            .await?
            .map(|organization| (organization.org_id, organization.name)))
    }
}
