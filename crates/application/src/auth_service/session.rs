use super::*;

impl AuthService {
    /// Resolves a presented token to an identity.
    ///
    /// Returns `None` when the token does not verify, names an unknown user,
    /// or carries a session version other than the stored one.
    pub async fn authenticate(&self, token: &str) -> AppResult<Option<UserIdentity>> {
        let Some(identity) = self.token_codec.verify(token) else {
            return Ok(None);
        };

        let current_version = self
            .user_repository
            .find_by_user_id(identity.user_id())
            .await?
            .map(|user| user.session_version);

        Ok((current_version == Some(identity.session_version())).then_some(identity))
    }

    /// Ends the caller's session. Anonymous callers are a no-op.
    pub async fn logout(&self, identity: Option<&UserIdentity>) -> AppResult<()> {
        let Some(identity) = identity else {
            return Ok(());
        };

        if let Some(user) = self
            .user_repository
            .find_by_user_id(identity.user_id())
            .await?
        {
            self.user_repository
                .bump_session_version(user.id, false)
                .await?;
        }

        Ok(())
    }

    /// Returns the stored account behind an authenticated identity.
    pub async fn current_user(&self, identity: &UserIdentity) -> AppResult<UserRecord> {
        self.user_repository
            .find_by_user_id(identity.user_id())
            .await?
            .ok_or_else(|| AppError::Unauthorized("user no longer exists".to_owned()))
    }
}
