//! Role administration and role-to-menu assignment.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use inkpost_core::{AppError, AppResult, NonEmptyString};
use inkpost_domain::role_key;

use crate::{RoleRecord, RoleRepository};

#[cfg(test)]
mod tests;

/// Input for creating a role.
#[derive(Debug, Clone, Default)]
pub struct CreateRoleInput {
    /// Role key; derived from the name when absent.
    pub role_id: Option<String>,
    /// Unique display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
}

/// Partial update of a role. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoleInput {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

/// Application service for roles.
#[derive(Clone)]
pub struct RoleService {
    repository: Arc<dyn RoleRepository>,
}

impl RoleService {
    /// Creates a new role service.
    #[must_use]
    pub fn new(repository: Arc<dyn RoleRepository>) -> Self {
        Self { repository }
    }

    /// Lists every role.
    pub async fn list_roles(&self) -> AppResult<Vec<RoleRecord>> {
        self.repository.list_roles().await
    }

    /// Creates a role with a unique name and key.
    pub async fn create_role(&self, input: CreateRoleInput) -> AppResult<RoleRecord> {
        let name = NonEmptyString::for_field("role name", input.name.trim())?;
        if self
            .repository
            .find_role_by_name(name.as_str())
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "role name '{name}' already exists"
            )));
        }

        let role_id = input
            .role_id
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| role_key(name.as_str()));
        if self.repository.find_role_by_key(&role_id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "role id '{role_id}' already exists"
            )));
        }

        let now = Utc::now();
        self.repository
            .create_role(RoleRecord {
                id: Uuid::new_v4(),
                role_id,
                name: name.into(),
                description: input.description,
                created_at: now,
                updated_at: now,
            })
            .await
    }

    /// Updates name and description.
    pub async fn update_role(&self, id: Uuid, input: UpdateRoleInput) -> AppResult<RoleRecord> {
        let mut role = self.require_role(id).await?;

        if let Some(name) = input.name {
            let name = NonEmptyString::for_field("role name", name.trim())?;
            if name.as_str() != role.name {
                if self
                    .repository
                    .find_role_by_name(name.as_str())
                    .await?
                    .is_some()
                {
                    return Err(AppError::Conflict(format!(
                        "role name '{name}' already exists"
                    )));
                }
                role.name = name.into();
            }
        }

        if input.description.is_some() {
            role.description = input.description;
        }
        role.updated_at = Utc::now();

        self.repository.save_role(&role).await
    }

    /// Deletes a role. Its users keep their accounts without a role.
    pub async fn delete_role(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete_role(id).await? {
            return Err(AppError::NotFound(format!("role '{id}' does not exist")));
        }

        Ok(())
    }

    /// Returns the external ids of the menus assigned to a role.
    pub async fn role_menu_ids(&self, id: Uuid) -> AppResult<Vec<String>> {
        self.require_role(id).await?;
        self.repository.list_role_menu_ids(id).await
    }

    /// Replaces the role's menu set. Unknown menu ids are ignored.
    pub async fn replace_role_menus(
        &self,
        id: Uuid,
        menu_ids: &[String],
    ) -> AppResult<Vec<String>> {
        self.require_role(id).await?;
        self.repository.replace_role_menus(id, menu_ids).await?;
        self.repository.list_role_menu_ids(id).await
    }

    async fn require_role(&self, id: Uuid) -> AppResult<RoleRecord> {
        self.repository
            .find_role(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("role '{id}' does not exist")))
    }
}
