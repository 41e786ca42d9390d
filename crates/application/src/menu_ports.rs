//! Menu persistence port.

use async_trait::async_trait;

use inkpost_core::AppResult;
use inkpost_domain::{Menu, MenuId};

/// Repository port for menus.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Lists every menu ordered by `sort_order`.
    async fn list_menus(&self) -> AppResult<Vec<Menu>>;

    /// Lists the menus assigned to a role key.
    async fn list_menus_for_role(&self, role_id: &str) -> AppResult<Vec<Menu>>;

    /// Finds a menu by internal identifier.
    async fn find_menu(&self, id: MenuId) -> AppResult<Option<Menu>>;

    /// Returns whether a menu with the external id exists.
    async fn menu_id_exists(&self, menu_id: &str) -> AppResult<bool>;

    /// Inserts a menu. Fails with `Conflict` when the external id is taken.
    async fn create_menu(&self, menu: &Menu) -> AppResult<()>;

    /// Overwrites the mutable attributes of a menu.
    async fn save_menu(&self, menu: &Menu) -> AppResult<()>;

    /// Deletes menus by external id, removing them from every role.
    async fn delete_menus(&self, menu_ids: &[String]) -> AppResult<()>;
}
