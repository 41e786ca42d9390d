use inkpost_application::{LoginOutcome, UserRecord};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for email/password registration.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/auth-register-request.ts"
)]
pub struct AuthRegisterRequest {
    pub email: String,
    pub password: String,
}

/// Incoming payload for email/password login.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/auth-login-request.ts"
)]
pub struct AuthLoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload. The token is also set as a cookie.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/auth-login-response.ts"
)]
pub struct AuthLoginResponse {
    pub token: String,
    pub email: String,
    pub user_id: String,
    pub role_name: Option<String>,
    pub username: Option<String>,
}

/// Profile of the authenticated user.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/current-user-response.ts"
)]
pub struct CurrentUserResponse {
    pub user_id: String,
    pub email: String,
    pub username: Option<String>,
    pub role_name: Option<String>,
    pub avatar: Option<String>,
}

impl From<LoginOutcome> for AuthLoginResponse {
    fn from(value: LoginOutcome) -> Self {
        Self {
            token: value.session.token,
            email: value.user.email,
            user_id: value.user.user_id,
            role_name: value.user.role_name,
            username: value.user.name,
        }
    }
}

impl From<UserRecord> for CurrentUserResponse {
    fn from(value: UserRecord) -> Self {
        Self {
            user_id: value.user_id,
            email: value.email,
            username: value.name,
            role_name: value.role_name,
            avatar: value.avatar,
        }
    }
}
