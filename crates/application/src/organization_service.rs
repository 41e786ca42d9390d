//! Organization administration.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use inkpost_core::{AppError, AppResult, NonEmptyString};
use inkpost_domain::generate_org_id;

use crate::{OrganizationRecord, OrganizationRepository};


const MAX_GENERATED_ID_ATTEMPTS: i64 = 8;

/// Input for creating an organization.
#[derive(Debug, Clone, Default)]
pub struct CreateOrganizationInput {
    /// External key; generated from the name when absent.
    pub org_id: Option<String>,
    /// External key of the parent organization.
    pub parent_org_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
}

/// Partial update of an organization. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrganizationInput {
    /// New parent key.
    pub parent_org_id: Option<String>,
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

/// Application service for organizations.
#[derive(Clone)]
pub struct OrganizationService {
    repository: Arc<dyn OrganizationRepository>,
}

impl OrganizationService {
    /// Creates a new organization service.
    #[must_use]
    pub fn new(repository: Arc<dyn OrganizationRepository>) -> Self {
        Self { repository }
    }

    /// Lists every organization.
    pub async fn list_organizations(&self) -> AppResult<Vec<OrganizationRecord>> {
        self.repository.list_organizations().await
    }

    /// Returns an organization by internal id.
    pub async fn get_organization(&self, id: Uuid) -> AppResult<OrganizationRecord> {
        self.repository
            .find_organization(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("organization '{id}' does not exist")))
    }

    /// Creates an organization, generating its key when none is supplied.
    pub async fn create_organization(
        &self,
        input: CreateOrganizationInput,
    ) -> AppResult<OrganizationRecord> {
        let name = NonEmptyString::for_field("organization name", input.name.trim())?;

        let org_id = match input
            .org_id
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
        {
            Some(org_id) => {
                if self
                    .repository
                    .find_organization_by_key(&org_id)
                    .await?
                    .is_some()
                {
                    return Err(AppError::Conflict(format!(
                        "organization id '{org_id}' already exists"
                    )));
                }
                org_id
            }
            None => self.generate_free_org_id(name.as_str()).await?,
        };

        let now = Utc::now();
        self.repository
            .create_organization(OrganizationRecord {
                id: Uuid::new_v4(),
                org_id,
                parent_org_id: input.parent_org_id.filter(|parent| !parent.is_empty()),
                name: name.into(),
                description: input.description,
                created_at: now,
                updated_at: now,
            })
            .await
    }

    async fn generate_free_org_id(&self, name: &str) -> AppResult<String> {
        let epoch_millis = Utc::now().timestamp_millis();
        for attempt in 0..MAX_GENERATED_ID_ATTEMPTS {
            let candidate = generate_org_id(Some(name), epoch_millis + attempt);
            if self
                .repository
                .find_organization_by_key(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }
        }

        Err(AppError::Conflict(
            "could not generate a free organization id, retry the request".to_owned(),
        ))
    }

    /// Applies a partial update.
    pub async fn update_organization(
        &self,
        id: Uuid,
        input: UpdateOrganizationInput,
    ) -> AppResult<OrganizationRecord> {
        let mut organization = self.get_organization(id).await?;

        if let Some(name) = input.name {
            organization.name = NonEmptyString::for_field("organization name", name.trim())?.into();
        }
        if let Some(parent_org_id) = input.parent_org_id {
            if parent_org_id == organization.org_id {
                return Err(AppError::Validation(
                    "an organization cannot be its own parent".to_owned(),
                ));
            }
            organization.parent_org_id = (!parent_org_id.is_empty()).then_some(parent_org_id);
        }
        if input.description.is_some() {
            organization.description = input.description;
        }
        organization.updated_at = Utc::now();

        self.repository.save_organization(&organization).await
    }

    /// Deletes an organization.
    pub async fn delete_organization(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete_organization(id).await? {
            return Err(AppError::NotFound(format!(
                "organization '{id}' does not exist"
            )));
        }

        Ok(())
    }
}
