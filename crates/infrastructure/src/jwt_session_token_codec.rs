//! HS256 JWT implementation of the session token port.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use inkpost_application::{IssuedSessionToken, SessionTokenCodec};
use inkpost_core::{AppError, AppResult, UserIdentity};

/// Shortest accepted signing secret, in bytes.
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Default token lifetime: 24 hours.
pub const DEFAULT_TOKEN_LIFETIME_SECONDS: u64 = 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionClaims {
    sub: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role_name: Option<String>,
    token_version: i32,
    iat: i64,
    exp: i64,
    jti: String,
}

/// Signs and verifies session tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct JwtSessionTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl JwtSessionTokenCodec {
    /// Creates a codec from a secret of at least [`MIN_JWT_SECRET_LENGTH`] bytes.
    pub fn new(secret: &str, lifetime_seconds: u64) -> AppResult<Self> {
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::Validation(format!(
                "JWT secret must be at least {MIN_JWT_SECRET_LENGTH} bytes"
            )));
        }

        let lifetime = i64::try_from(lifetime_seconds)
            .ok()
            .filter(|seconds| *seconds > 0)
            .and_then(Duration::try_seconds)
            .ok_or_else(|| AppError::Validation("token lifetime is out of range".to_owned()))?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["sub", "exp", "iat"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime,
        })
    }
}

impl SessionTokenCodec for JwtSessionTokenCodec {
    fn issue(&self, identity: &UserIdentity) -> AppResult<IssuedSessionToken> {
        let issued_at = Utc::now();
        let expires_at = issued_at
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| AppError::Internal("session expiry is out of range".to_owned()))?;
        let claims = SessionClaims {
            sub: identity.user_id().to_owned(),
            email: identity.email().to_owned(),
            role_name: identity.role_name().map(str::to_owned),
            token_version: identity.session_version(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let header = Header::new(Algorithm::HS256);
        let token = jsonwebtoken::encode(&header, &claims, &self.encoding_key)
            .map_err(|error| AppError::Internal(format!("failed to sign session token: {error}")))?;

        Ok(IssuedSessionToken { token, expires_at })
    }

    fn verify(&self, token: &str) -> Option<UserIdentity> {
        let claims = jsonwebtoken::decode::<SessionClaims>(
            token,
            &self.decoding_key,
            &self.validation,
        )
        .ok()?
        .claims;

        Some(UserIdentity::new(
            claims.sub,
            claims.email,
            claims.role_name,
            claims.token_version,
        ))
    }
}
