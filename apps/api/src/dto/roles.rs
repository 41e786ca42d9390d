use inkpost_application::{CreateRoleInput, RoleRecord, UpdateRoleInput};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// API representation of a role.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub id: String,
    pub role_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Incoming payload for role creation.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-role-request.ts"
)]
pub struct CreateRoleRequest {
    pub role_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

/// Incoming payload for role update. Omitted fields keep their value.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-role-request.ts"
)]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// The full menu set of a role.
#[derive(Debug, Deserialize, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-menus-payload.ts"
)]
pub struct RoleMenusPayload {
    pub menu_ids: Vec<String>,
}

impl From<RoleRecord> for RoleResponse {
    fn from(value: RoleRecord) -> Self {
        Self {
            id: value.id.to_string(),
            role_id: value.role_id,
            name: value.name,
            description: value.description,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

impl From<CreateRoleRequest> for CreateRoleInput {
    fn from(value: CreateRoleRequest) -> Self {
        Self {
            role_id: value.role_id,
            name: value.name,
            description: value.description,
        }
    }
}

impl From<UpdateRoleRequest> for UpdateRoleInput {
    fn from(value: UpdateRoleRequest) -> Self {
        Self {
            name: value.name,
            description: value.description,
        }
    }
}
