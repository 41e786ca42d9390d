use super::cookies::session_cookie;
use super::*;

/// POST /api/auth/register - Create an account with email and password.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<AuthRegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .auth_service
        .register(RegisterInput {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    tracing::info!(user_id = %user.user_id, "account registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /api/auth/login - Verify credentials and open a session.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<AuthLoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let outcome = match state
        .auth_service
        .login(payload.email.as_str(), payload.password.as_str())
        .await
    {
        Ok(outcome) => outcome,
        Err(error) => {
            tracing::info!(email = %payload.email.trim(), error = %error, "login rejected");
            return Err(error.into());
        }
    };

    tracing::info!(
        user_id = %outcome.user.user_id,
        session_version = outcome.user.session_version,
        "login succeeded"
    );

    let cookie = session_cookie(
        outcome.session.token.as_str(),
        state.token_lifetime_seconds,
        state.cookie_secure,
    )?;

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthLoginResponse::from(outcome)),
    ))
}
