use super::*;

impl AuthService {
    /// Verifies credentials and opens a new session.
    ///
    /// Opening a session invalidates every token issued before it.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let email = email.trim().to_lowercase();
        let Some(mut user) = self.user_repository.find_by_email(&email).await? else {
            // Keep the response time close to the known-user path.
            let _ = self.password_hasher.hash_password(password);
            return Err(AppError::Unauthorized(
                INVALID_CREDENTIALS_MESSAGE.to_owned(),
            ));
        };

        if !self
            .password_hasher
            .verify_password(password, &user.password_hash)?
        {
            return Err(AppError::Unauthorized(
                INVALID_CREDENTIALS_MESSAGE.to_owned(),
            ));
        }

        if !user.status.is_enabled() {
            return Err(AppError::Forbidden("account is disabled".to_owned()));
        }

        user.session_version = self
            .user_repository
            .bump_session_version(user.id, true)
            .await?;

        let identity = UserIdentity::new(
            user.user_id.clone(),
            user.email.clone(),
            user.role_name.clone(),
            user.session_version,
        );
        let session = self.token_codec.issue(&identity)?;

        Ok(LoginOutcome { session, user })
    }
}
