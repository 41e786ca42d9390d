//! PostgreSQL-backed role repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use inkpost_application::{RoleRecord, RoleRepository};
use inkpost_core::{AppError, AppResult};

#[cfg(test)]
mod tests;

/// PostgreSQL implementation of the role repository port.
#[derive(Clone)]
pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_where(&self, predicate: &str, value: &str) -> AppResult<Option<RoleRecord>> {
        let query = format!(
            r#"
            SELECT id, role_id, name, description, created_at, updated_at
            FROM roles
            WHERE {predicate}
            "#
        );

        let row = sqlx::query_as::<_, RoleRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to find role: {error}")))?;

        Ok(row.map(RoleRecord::from))
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    id: Uuid,
    role_id: String,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RoleRow> for RoleRecord {
    fn from(row: RoleRow) -> Self {
        Self {
            id: row.id,
            role_id: row.role_id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn list_roles(&self) -> AppResult<Vec<RoleRecord>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, role_id, name, description, created_at, updated_at
            FROM roles
            ORDER BY created_at, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list roles: {error}")))?;

        Ok(rows.into_iter().map(RoleRecord::from).collect())
    }

    async fn find_role(&self, id: Uuid) -> AppResult<Option<RoleRecord>> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, role_id, name, description, created_at, updated_at
            FROM roles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find role: {error}")))?;

        Ok(row.map(RoleRecord::from))
    }

    async fn find_role_by_key(&self, role_id: &str) -> AppResult<Option<RoleRecord>> {
        self.find_where("role_id = $1", role_id).await
    }

    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<RoleRecord>> {
        self.find_where("name = $1", name).await
    }

    async fn create_role(&self, role: RoleRecord) -> AppResult<RoleRecord> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            INSERT INTO roles (id, role_id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, role_id, name, description, created_at, updated_at
            "#,
        )
        .bind(role.id)
        .bind(&role.role_id)
        .bind(&role.name)
        .bind(&role.description)
        .bind(role.created_at)
        .bind(role.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| role_conflict_or_internal(error, "create role"))?;

        Ok(row.into())
    }

    async fn save_role(&self, role: &RoleRecord) -> AppResult<RoleRecord> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            UPDATE roles
            SET name = $2, description = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, role_id, name, description, created_at, updated_at
            "#,
        )
        .bind(role.id)
        .bind(&role.name)
        .bind(&role.description)
        .bind(role.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| role_conflict_or_internal(error, "update role"))?;

        row.map(RoleRecord::from)
            .ok_or_else(|| AppError::NotFound(format!("role '{}' does not exist", role.id)))
    }

    async fn delete_role(&self, id: Uuid) -> AppResult<bool> {
        // users.role_id is cleared and role_menus rows dropped by foreign keys.
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete role: {error}")))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_role_menu_ids(&self, id: Uuid) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT menus.menu_id
            FROM role_menus
            INNER JOIN menus ON menus.id = role_menus.menu_id
            WHERE role_menus.role_id = $1
            ORDER BY menus.sort_order, menus.menu_id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list role menus: {error}")))
    }

    async fn replace_role_menus(&self, id: Uuid, menu_ids: &[String]) -> AppResult<()> {
        let mut transaction =
            self.pool.begin().await.map_err(|error| {
                AppError::Internal(format!("failed to begin transaction: {error}"))
            })?;

        sqlx::query("DELETE FROM role_menus WHERE role_id = $1")
            .bind(id)
            .execute(&mut *transaction)
            .await
            .map_err(|error| AppError::Internal(format!("failed to clear role menus: {error}")))?;

        sqlx::query(
            r#"
            INSERT INTO role_menus (role_id, menu_id)
            SELECT $1, menus.id
            FROM menus
            WHERE menus.menu_id = ANY($2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(id)
        .bind(menu_ids)
        .execute(&mut *transaction)
        .await
        .map_err(|error| AppError::Internal(format!("failed to assign role menus: {error}")))?;

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!("failed to commit role menu assignment: {error}"))
        })
    }
}

fn role_conflict_or_internal(error: sqlx::Error, operation: &str) -> AppError {
    if let sqlx::Error::Database(ref database_error) = error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Conflict("a role with this id or name already exists".to_owned());
    }

    AppError::Internal(format!("failed to {operation}: {error}"))
}
