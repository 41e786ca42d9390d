use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use cookie::Cookie;
use inkpost_core::{AppError, UserIdentity};

use crate::auth::AUTH_COOKIE_NAME;
use crate::error::ApiResult;
use crate::state::AppState;

/// Attaches the caller's identity when a live session token is presented.
///
/// Requests without a valid token continue anonymously.
pub async fn authenticate_request(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = presented_token(request.headers()) {
        match state.auth_service.authenticate(token.as_str()).await {
            Ok(Some(identity)) => {
                request.extensions_mut().insert(identity);
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(error = %error, "session lookup failed, continuing anonymously");
            }
        }
    }

    next.run(request).await
}

pub async fn require_auth(request: Request, next: Next) -> ApiResult<Response> {
    if request.extensions().get::<UserIdentity>().is_none() {
        return Err(AppError::Unauthorized("authentication required".to_owned()).into());
    }

    Ok(next.run(request).await)
}

/// Bearer header first, then the session cookie.
pub(crate) fn presented_token(headers: &HeaderMap) -> Option<String> {
    bearer_token(headers).or_else(|| cookie_token(headers))
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
}

fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == AUTH_COOKIE_NAME && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_owned())
}
