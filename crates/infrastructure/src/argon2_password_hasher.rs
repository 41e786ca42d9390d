//! Argon2id password hashing.
//!
//! Parameters: m=19456 (19 MiB), t=2, p=1.

use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use inkpost_application::PasswordHasher as PasswordHasherPort;
use inkpost_core::{AppError, AppResult};

/// Salted Argon2id hasher producing PHC-format strings.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Creates a hasher with the account password cost parameters.
    #[must_use]
    pub fn new() -> Self {
        let params = Params::new(19456, 2, 1, None).unwrap_or_else(|_| Params::default());

        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherPort for Argon2PasswordHasher {
    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|error| AppError::Internal(format!("failed to hash password: {error}")))
    }

    /// Unparseable stored hashes count as a mismatch so a corrupted row
    /// reads as bad credentials rather than a server error.
    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        let Ok(parsed) = PasswordHash::new(hash) else {
            tracing::warn!("stored password hash is not in PHC format");
            return Ok(false);
        };

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(error) => Err(AppError::Internal(format!(
                "password verification failed: {error}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpost_application::PasswordHasher as PasswordHasherPort;
    use inkpost_core::AppResult;

    #[test]
    fn matching_password_verifies() -> AppResult<()> {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash_password("s3cret-passphrase")?;

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("s3cret-passphrase", &hash)?);
        Ok(())
    }

    #[test]
    fn wrong_password_does_not_verify() -> AppResult<()> {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash_password("s3cret-passphrase")?;

        assert!(!hasher.verify_password("other-passphrase", &hash)?);
        Ok(())
    }

    #[test]
    fn same_password_hashes_differently() -> AppResult<()> {
        let hasher = Argon2PasswordHasher::new();

        assert_ne!(
            hasher.hash_password("s3cret-passphrase")?,
            hasher.hash_password("s3cret-passphrase")?
        );
        Ok(())
    }

    #[test]
    fn malformed_stored_hash_is_a_mismatch() -> AppResult<()> {
        let hasher = Argon2PasswordHasher::new();

        assert!(!hasher.verify_password("anything", "plaintext-in-db")?);
        Ok(())
    }
}
