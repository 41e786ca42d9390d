use inkpost_application::{CreateOrganizationInput, OrganizationRecord, UpdateOrganizationInput};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// API representation of an organization.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/organization-response.ts"
)]
pub struct OrganizationResponse {
    pub id: String,
    pub org_id: String,
    pub parent_org_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Incoming payload for organization creation.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-organization-request.ts"
)]
pub struct CreateOrganizationRequest {
    pub org_id: Option<String>,
    pub parent_org_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

/// Incoming payload for organization update. An empty `parentOrgId` clears the parent.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-organization-request.ts"
)]
pub struct UpdateOrganizationRequest {
    pub parent_org_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<OrganizationRecord> for OrganizationResponse {
    fn from(value: OrganizationRecord) -> Self {
        Self {
            id: value.id.to_string(),
            org_id: value.org_id,
            parent_org_id: value.parent_org_id,
            name: value.name,
            description: value.description,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

impl From<CreateOrganizationRequest> for CreateOrganizationInput {
    fn from(value: CreateOrganizationRequest) -> Self {
        Self {
            org_id: value.org_id,
            parent_org_id: value.parent_org_id,
            name: value.name,
            description: value.description,
        }
    }
}

impl From<UpdateOrganizationRequest> for UpdateOrganizationInput {
    fn from(value: UpdateOrganizationRequest) -> Self {
        Self {
            parent_org_id: value.parent_org_id,
            name: value.name,
            description: value.description,
        }
    }
}
