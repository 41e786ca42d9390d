use super::*;

impl PostgresUserRepository {
    pub(super) async fn list_users_impl(
        &self,
        keyword: Option<&str>,
    ) -> AppResult<Vec<UserRecord>> {
        let query = format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users u
            LEFT JOIN roles r ON r.role_id = u.role_id
            WHERE $1::TEXT IS NULL
               OR u.email ILIKE '%' || $1 || '%'
               OR u.name ILIKE '%' || $1 || '%'
            ORDER BY u.created_at, u.email
            "#
        );

        let rows = sqlx::query_as::<_, UserRow>(&query)
            .bind(keyword.map(escape_like))
            .fetch_all(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to list users: {error}")))?;

        rows.into_iter().map(UserRecord::try_from).collect()
    }

    pub(super) async fn find_one_impl(
        &self,
        predicate: &str,
        value: &str,
        label: &str,
    ) -> AppResult<Option<UserRecord>> {
        let query = format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users u
            LEFT JOIN roles r ON r.role_id = u.role_id
            WHERE {predicate}
            LIMIT 1
            "#
        );

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to find user by {label}: {error}"))
            })?;

        row.map(UserRecord::try_from).transpose()
    }

    pub(super) async fn find_by_id_impl(&self, id: UserId) -> AppResult<Option<UserRecord>> {
        let query = format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users u
            LEFT JOIN roles r ON r.role_id = u.role_id
            WHERE u.id = $1
            "#
        );

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to find user by id: {error}")))?;

        row.map(UserRecord::try_from).transpose()
    }
}

fn escape_like(keyword: &str) -> String {
    keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
