//! Credential and session endpoints.

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse};
use inkpost_application::RegisterInput;
use inkpost_core::UserIdentity;

use crate::dto::{
    AuthLoginRequest, AuthLoginResponse, AuthRegisterRequest, CurrentUserResponse,
    GenericMessageResponse, UserResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod cookies;
mod password;
mod session;

pub use cookies::AUTH_COOKIE_NAME;
pub use password::{login_handler, register_handler};
pub use session::{logout_handler, me_handler};
