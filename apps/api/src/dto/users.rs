use serde::{Deserialize, Serialize};
use ts_rs::TS;

mod conversions;

/// API representation of a user. Never carries the password hash.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-response.ts"
)]
pub struct UserResponse {
    pub id: String,
    pub user_id: String,
    pub email: String,
    pub name: Option<String>,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub org_id: Option<String>,
    pub organization: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub job_title: Option<String>,
    pub phone: Option<String>,
    pub status: i16,
    pub last_login_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Incoming payload for user creation by an administrator.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-user-request.ts"
)]
pub struct CreateUserRequest {
    pub user_id: Option<String>,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub role_id: Option<String>,
    pub org_id: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub job_title: Option<String>,
    pub phone: Option<String>,
    pub status: Option<i16>,
}

/// Incoming payload for user update. Omitted fields keep their value.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-user-request.ts"
)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role_id: Option<String>,
    pub org_id: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub job_title: Option<String>,
    pub phone: Option<String>,
    pub status: Option<i16>,
}

/// Query string of the user search.
#[derive(Debug, Deserialize)]
pub struct UserSearchQuery {
    pub keyword: Option<String>,
}
