//! Menu trees and the menu lifecycle.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use inkpost_core::{AppError, AppResult};
use inkpost_domain::{
    Menu, MenuAttributes, MenuId, MenuNode, MenuStatus, MenuType, UserId, build_full_menu_forest,
    build_visible_menu_forest, cascade_deletion_order, generate_menu_id,
};

use crate::{MenuRepository, UserRepository};

mod lifecycle;
mod tree;


/// Input for creating a menu. Absent fields take their defaults.
#[derive(Debug, Clone, Default)]
pub struct CreateMenuInput {
    /// External id; generated from the name when absent or empty.
    pub menu_id: Option<String>,
    /// External parent id.
    pub parent_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Route path.
    pub path: Option<String>,
    /// Icon name.
    pub icon: Option<String>,
    /// Sibling position, `0` when absent.
    pub sort_order: Option<i32>,
    /// Entry kind.
    pub menu_type: Option<MenuType>,
    /// Permission string.
    pub permission: Option<String>,
    /// Visibility, `true` when absent.
    pub visible: Option<bool>,
    /// Activation flag, active when absent.
    pub status: Option<MenuStatus>,
}

/// New position of a menu in a bulk reorder.
#[derive(Debug, Clone)]
pub struct MenuPosition {
    /// Internal id as received; malformed values are skipped.
    pub id: String,
    /// New sibling position; the current one is kept when absent.
    pub sort_order: Option<i32>,
    /// New external parent id; `None` moves the menu to the root.
    pub parent_id: Option<String>,
}

/// Application service for menus.
#[derive(Clone)]
pub struct MenuService {
    menu_repository: Arc<dyn MenuRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl MenuService {
    /// Creates a new menu service.
    #[must_use]
    pub fn new(
        menu_repository: Arc<dyn MenuRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            menu_repository,
            user_repository,
        }
    }
}
