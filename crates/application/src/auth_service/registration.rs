use super::*;

impl AuthService {
    /// Registers a new account with the default role.
    pub async fn register(&self, input: RegisterInput) -> AppResult<UserRecord> {
        let email = EmailAddress::new(input.email)?;
        validate_password(&input.password)?;

        if self
            .user_repository
            .find_by_email(email.as_str())
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("email is already registered".to_owned()));
        }

        let user_id = allocate_user_key(self.user_repository.as_ref(), email.as_str()).await?;
        let role_id = default_role_key(self.role_repository.as_ref()).await?;
        let password_hash = self.password_hasher.hash_password(&input.password)?;

        self.user_repository
            .create_user(NewUser {
                id: UserId::new(),
                user_id,
                email: email.into(),
                password_hash,
                role_id,
                org_id: None,
                organization: None,
                profile: UserProfile::default(),
                status: AccountStatus::Enabled,
            })
            .await
    }
}
