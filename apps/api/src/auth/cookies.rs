use axum::http::HeaderValue;
use cookie::time::Duration;
use cookie::{Cookie, SameSite};
use inkpost_core::AppError;

/// Name of the cookie carrying the session token for browser clients.
pub const AUTH_COOKIE_NAME: &str = "auth_token";

pub(super) fn session_cookie(
    token: &str,
    lifetime_seconds: u64,
    secure: bool,
) -> Result<HeaderValue, AppError> {
    let max_age = i64::try_from(lifetime_seconds).unwrap_or(i64::MAX);
    let cookie = Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(max_age))
        .build();

    header_value(&cookie)
}

pub(super) fn cleared_session_cookie(secure: bool) -> Result<HeaderValue, AppError> {
    let mut cookie = Cookie::build((AUTH_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    cookie.make_removal();

    header_value(&cookie)
}

fn header_value(cookie: &Cookie<'_>) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(cookie.to_string().as_str())
        .map_err(|error| AppError::Internal(format!("failed to encode auth cookie: {error}")))
}

#[cfg(test)]
mod tests {
    use super::{cleared_session_cookie, session_cookie};

    #[test]
    fn session_cookie_is_http_only() {
        let value = session_cookie("abc.def.ghi", 60, true).unwrap_or_else(|_| panic!("test"));
        let value = value.to_str().unwrap_or_else(|_| panic!("test"));

        assert!(value.starts_with("auth_token=abc.def.ghi"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("Secure"));
        assert!(value.contains("Max-Age=60"));
    }

    #[test]
    fn cleared_cookie_expires_immediately() {
        let value = cleared_session_cookie(false).unwrap_or_else(|_| panic!("test"));
        let value = value.to_str().unwrap_or_else(|_| panic!("test"));

        assert!(value.starts_with("auth_token="));
        assert!(value.contains("Max-Age=0"));
        assert!(!value.contains("Secure"));
    }
}
