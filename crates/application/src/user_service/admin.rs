use super::*;

impl UserService {
    /// Creates a user, assigning the default role when none is given.
    pub async fn create_user(&self, input: CreateUserInput) -> AppResult<UserRecord> {
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

        let user_id = match input.user_id.map(|value| value.trim().to_owned()) {
            Some(user_id) if !user_id.is_empty() => {
                if self
                    .user_repository
                    .find_by_user_id(&user_id)
                    .await?
                    .is_some()
                {
                    return Err(AppError::Conflict(format!(
                        "user id '{user_id}' is already taken"
                    )));
                }
                user_id
            }
            _ => allocate_user_key(self.user_repository.as_ref(), email.as_str()).await?,
        };

        let role_id = match input.role_id.as_deref() {
            Some(role_id) => self.require_role(role_id).await?,
            None => default_role_key(self.role_repository.as_ref())
                .await?
                .ok_or_else(|| AppError::Validation("default role 'user' is missing".to_owned()))?,
        };

        let (org_id, organization) = match input.org_id.as_deref() {
            Some(org_id) => self.resolve_organization(org_id).await?.unzip(),
            None => (None, None),
        };

        let password_hash = self.password_hasher.hash_password(&input.password)?;

        self.user_repository
            .create_user(NewUser {
                id: UserId::new(),
                user_id,
                email: email.into(),
                password_hash,
                role_id: Some(role_id),
                org_id,
                organization,
                profile: input.profile,
                status: input.status.unwrap_or(AccountStatus::Enabled),
            })
            .await
    }

    /// Applies a partial update.
    ///
    /// Disabling an enabled account also revokes its session.
    pub async fn update_user(&self, id: UserId, input: UpdateUserInput) -> AppResult<UserRecord> {
        let mut user = self.get_user(id).await?;

        if let Some(email) = input.email {
            let email = EmailAddress::new(email)?;
            if email.as_str() != user.email {
                if self
                    .user_repository
                    .find_by_email(email.as_str())
                    .await?
                    .is_some()
                {
                    return Err(AppError::Conflict("email is already registered".to_owned()));
                }
                user.email = email.into();
            }
        }

        if let Some(password) = input.password.filter(|password| !password.is_empty()) {
            validate_password(&password)?;
            user.password_hash = self.password_hasher.hash_password(&password)?;
        }

        if let Some(role_id) = input.role_id.as_deref() {
            user.role_id = Some(self.require_role(role_id).await?);
        }

        if let Some(org_id) = input.org_id.as_deref()
            && let Some((org_id, organization)) = self.resolve_organization(org_id).await?
        {
            user.org_id = Some(org_id);
            user.organization = Some(organization);
        }

        let UserProfile {
            name,
            avatar,
            bio,
            website,
            job_title,
            phone,
        } = input.profile;
        merge(&mut user.name, name);
        merge(&mut user.avatar, avatar);
        merge(&mut user.bio, bio);
        merge(&mut user.website, website);
        merge(&mut user.job_title, job_title);
        merge(&mut user.phone, phone);

        let revoke_session = user.status.is_enabled()
            && input.status.is_some_and(|status| !status.is_enabled());
        if let Some(status) = input.status {
            user.status = status;
        }

        let mut saved = self.user_repository.save_user(&user).await?;
        if revoke_session {
            saved.session_version = self
                .user_repository
                .bump_session_version(saved.id, false)
                .await?;
        }

        Ok(saved)
    }

    /// Deletes a user.
    pub async fn delete_user(&self, id: UserId) -> AppResult<()> {
        if !self.user_repository.delete_user(id).await? {
            return Err(AppError::NotFound(format!("user '{id}' does not exist")));
        }

        Ok(())
    }
}

fn merge(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}
