use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use inkpost_core::AppError;
use inkpost_infrastructure::{DEFAULT_TOKEN_LIFETIME_SECONDS, MIN_JWT_SECRET_LENGTH};
use tracing_subscriber::EnvFilter;

const DEFAULT_FRONTEND_URLS: &str = "http://localhost:3000,http://localhost:3001";

/// Process configuration read from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,
    pub api_host: String,
    pub api_port: u16,
    pub frontend_urls: Vec<String>,
    pub cookie_secure: bool,
    pub redis_url: Option<String>,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let database_url = required_non_empty_env("DATABASE_URL")?;
        let database_max_connections = parsed_env("DATABASE_MAX_CONNECTIONS", 10_u32)?;

        let jwt_secret = required_non_empty_env("JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::Validation(format!(
                "JWT_SECRET must be at least {MIN_JWT_SECRET_LENGTH} characters"
            )));
        }
        let jwt_expiration_seconds =
            parsed_env("JWT_EXPIRATION_SECONDS", DEFAULT_TOKEN_LIFETIME_SECONDS)?;

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = parsed_env("API_PORT", 8080_u16)?;

        let frontend_urls = parse_origin_list(
            env::var("FRONTEND_URLS")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URLS.to_owned())
                .as_str(),
        );
        let cookie_secure = env::var("AUTH_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".to_owned())
            .eq_ignore_ascii_case("true");

        let redis_url = env::var("REDIS_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());

        Ok(Self {
            migrate_only,
            database_url,
            database_max_connections,
            jwt_secret,
            jwt_expiration_seconds,
            api_host,
            api_port,
            frontend_urls,
            cookie_secure,
            redis_url,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn parse_origin_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn parsed_env<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map_err(|error| AppError::Validation(format!("invalid {name}: {error}"))),
        _ => Ok(default),
    }
}

fn required_non_empty_env(name: &str) -> Result<String, AppError> {
    let value = env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::parse_origin_list;

    #[test]
    fn origin_list_is_trimmed_and_skips_blanks() {
        assert_eq!(
            parse_origin_list(" http://a.test/ ,, http://b.test"),
            vec!["http://a.test".to_owned(), "http://b.test".to_owned()]
        );
        assert!(parse_origin_list("").is_empty());
    }
}
