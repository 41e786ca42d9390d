use super::*;

impl PostgresUserRepository {
    pub(super) async fn create_user_impl(&self, user: NewUser) -> AppResult<UserRecord> {
        let id = user.id;
        sqlx::query(
            r#"
            INSERT INTO users (
                id, user_id, email, password_hash, name, role_id, org_id, organization,
                avatar, bio, website, job_title, phone, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&user.user_id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.profile.name)
        .bind(&user.role_id)
        .bind(&user.org_id)
        .bind(&user.organization)
        .bind(&user.profile.avatar)
        .bind(&user.profile.bio)
        .bind(&user.profile.website)
        .bind(&user.profile.job_title)
        .bind(&user.profile.phone)
        .bind(user.status.code())
        .execute(&self.pool)
        .await
        .map_err(|error| user_conflict_or_internal(error, "create user"))?;

        self.require_user(id).await
    }

    pub(super) async fn save_user_impl(&self, user: &UserRecord) -> AppResult<UserRecord> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET email = $2,
                password_hash = $3,
                name = $4,
                role_id = $5,
                org_id = $6,
                organization = $7,
                avatar = $8,
                bio = $9,
                website = $10,
                job_title = $11,
                phone = $12,
                status = $13,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(&user.role_id)
        .bind(&user.org_id)
        .bind(&user.organization)
        .bind(&user.avatar)
        .bind(&user.bio)
        .bind(&user.website)
        .bind(&user.job_title)
        .bind(&user.phone)
        .bind(user.status.code())
        .execute(&self.pool)
        .await
        .map_err(|error| user_conflict_or_internal(error, "update user"))?;

        if result.rows_affected() == 0 {
            let id = &user.id;
            return Err(AppError::NotFound(format!("user '{id}' does not exist")));
        }

        self.require_user(user.id).await
    }

    pub(super) async fn delete_user_impl(&self, id: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete user: {error}")))?;

        Ok(result.rows_affected() > 0)
    }

    pub(super) async fn bump_session_version_impl(
        &self,
        id: UserId,
        stamp_login: bool,
    ) -> AppResult<i32> {
        let version = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE users
            SET session_version = session_version + 1,
                last_login_at = CASE WHEN $2 THEN NOW() ELSE last_login_at END
            WHERE id = $1
            RETURNING session_version
            "#,
        )
        .bind(id.as_uuid())
        .bind(stamp_login)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to increment session version: {error}"))
        })?;

        version.ok_or_else(|| AppError::NotFound(format!("user '{id}' does not exist")))
    }

    async fn require_user(&self, id: UserId) -> AppResult<UserRecord> {
        self.find_by_id_impl(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("user '{id}' vanished after write")))
    }
}
