//! PostgreSQL-backed menu repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use inkpost_application::MenuRepository;
use inkpost_core::{AppError, AppResult};
use inkpost_domain::{Menu, MenuAttributes, MenuId, MenuStatus, MenuType};


/// PostgreSQL implementation of the menu repository port.
#[derive(Clone)]
pub struct PostgresMenuRepository {
    pool: PgPool,
}

impl PostgresMenuRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MenuRow {
    id: Uuid,
    menu_id: String,
    parent_id: Option<String>,
    name: String,
    path: Option<String>,
    icon: Option<String>,
    sort_order: i32,
    menu_type: Option<String>,
    permission: Option<String>,
    visible: bool,
    status: Option<i16>,
}

impl TryFrom<MenuRow> for Menu {
    type Error = AppError;

    fn try_from(row: MenuRow) -> Result<Self, Self::Error> {
        Menu::new(
            MenuId::from_uuid(row.id),
            row.menu_id,
            MenuAttributes {
                parent_id: row.parent_id,
                name: row.name,
                path: row.path,
                icon: row.icon,
                sort_order: row.sort_order,
                menu_type: row.menu_type.as_deref().map(MenuType::parse).transpose()?,
                permission: row.permission,
                visible: row.visible,
                status: row.status.map(MenuStatus::from_code).transpose()?,
            },
        )
    }
}

fn into_menus(rows: Vec<MenuRow>) -> AppResult<Vec<Menu>> {
    rows.into_iter().map(Menu::try_from).collect()
}

#[async_trait]
impl MenuRepository for PostgresMenuRepository {
    async fn list_menus(&self) -> AppResult<Vec<Menu>> {
        let rows = sqlx::query_as::<_, MenuRow>(
            r#"
            SELECT id, menu_id, parent_id, name, path, icon, sort_order, menu_type,
                   permission, visible, status
            FROM menus
            ORDER BY sort_order, created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list menus: {error}")))?;

        into_menus(rows)
    }

    async fn list_menus_for_role(&self, role_id: &str) -> AppResult<Vec<Menu>> {
        let rows = sqlx::query_as::<_, MenuRow>(
            r#"
            SELECT menus.id, menus.menu_id, menus.parent_id, menus.name, menus.path,
                   menus.icon, menus.sort_order, menus.menu_type, menus.permission,
                   menus.visible, menus.status
            FROM menus
            INNER JOIN role_menus ON role_menus.menu_id = menus.id
            INNER JOIN roles ON roles.id = role_menus.role_id
            WHERE roles.role_id = $1
            ORDER BY menus.created_at
            "#,
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list role menus: {error}")))?;

        into_menus(rows)
    }

    async fn find_menu(&self, id: MenuId) -> AppResult<Option<Menu>> {
        let row = sqlx::query_as::<_, MenuRow>(
            r#"
            SELECT id, menu_id, parent_id, name, path, icon, sort_order, menu_type,
                   permission, visible, status
            FROM menus
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find menu: {error}")))?;

        row.map(Menu::try_from).transpose()
    }

    async fn menu_id_exists(&self, menu_id: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM menus WHERE menu_id = $1)")
            .bind(menu_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to check menu id: {error}")))
    }

    async fn create_menu(&self, menu: &Menu) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO menus (
                id, menu_id, parent_id, name, path, icon, sort_order, menu_type,
                permission, visible, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(menu.id().as_uuid())
        .bind(menu.menu_id())
        .bind(menu.parent_id())
        .bind(menu.name())
        .bind(menu.path())
        .bind(menu.icon())
        .bind(menu.sort_order())
        .bind(menu.menu_type().map(|menu_type| menu_type.as_str()))
        .bind(menu.permission())
        .bind(menu.visible())
        .bind(menu.status().map(MenuStatus::code))
        .execute(&self.pool)
        .await
        .map_err(|error| {
            if let sqlx::Error::Database(ref database_error) = error
                && database_error.code().as_deref() == Some("23505")
            {
                return AppError::Conflict(format!("menu id '{}' already exists", menu.menu_id()));
            }

            AppError::Internal(format!("failed to create menu: {error}"))
        })?;

        Ok(())
    }

    async fn save_menu(&self, menu: &Menu) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE menus
            SET parent_id = $2,
                name = $3,
                path = $4,
                icon = $5,
                sort_order = $6,
                menu_type = $7,
                permission = $8,
                visible = $9,
                status = $10,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(menu.id().as_uuid())
        .bind(menu.parent_id())
        .bind(menu.name())
        .bind(menu.path())
        .bind(menu.icon())
        .bind(menu.sort_order())
        .bind(menu.menu_type().map(|menu_type| menu_type.as_str()))
        .bind(menu.permission())
        .bind(menu.visible())
        .bind(menu.status().map(MenuStatus::code))
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to update menu: {error}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "menu '{}' does not exist",
                menu.id()
            )));
        }

        Ok(())
    }

    async fn delete_menus(&self, menu_ids: &[String]) -> AppResult<()> {
        // role_menus rows go with the menus through ON DELETE CASCADE.
        sqlx::query("DELETE FROM menus WHERE menu_id = ANY($1)")
            .bind(menu_ids)
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete menus: {error}")))?;

        Ok(())
    }
}
