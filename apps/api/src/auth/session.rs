use super::cookies::cleared_session_cookie;
use super::*;

/// POST /api/auth/logout - End the caller's session and clear the cookie.
pub async fn logout_handler(
    State(state): State<AppState>,
    user: Option<Extension<UserIdentity>>,
) -> ApiResult<impl IntoResponse> {
    let identity = user.map(|Extension(identity)| identity);
    state.auth_service.logout(identity.as_ref()).await?;

    if let Some(identity) = &identity {
        tracing::info!(user_id = %identity.user_id(), "logged out");
    }

    Ok((
        AppendHeaders([(SET_COOKIE, cleared_session_cookie(state.cookie_secure)?)]),
        Json(GenericMessageResponse {
            message: "logged out".to_owned(),
        }),
    ))
}

/// GET /api/auth/me - Profile of the authenticated user.
pub async fn me_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let record = state.auth_service.current_user(&user).await?;

    Ok(Json(CurrentUserResponse::from(record)))
}
