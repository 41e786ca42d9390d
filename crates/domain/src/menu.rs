//! Navigation menus and the authorization forest built from them.
//!
//! Menus are stored flat. Each row names its parent through the parent's
//! external `menu_id`; the forest is rebuilt from those rows on every read.

use std::collections::{HashMap, HashSet};

use inkpost_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Internal identifier of a menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuId(Uuid);

impl MenuId {
    /// Creates a new random menu identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a menu identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Parses a menu identifier, returning `None` for malformed input.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MenuId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MenuId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Kind of navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuType {
    /// Navigable page entry.
    Menu,
    /// Action permission rendered inside a page.
    Button,
    /// Grouping node without its own page.
    Directory,
}

impl MenuType {
    /// Returns the storage string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "MENU",
            Self::Button => "BUTTON",
            Self::Directory => "DIRECTORY",
        }
    }

    /// Parses a storage string.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "MENU" => Ok(Self::Menu),
            "BUTTON" => Ok(Self::Button),
            "DIRECTORY" => Ok(Self::Directory),
            _ => Err(AppError::Validation(format!("unknown menu type '{value}'"))),
        }
    }
}

/// Activation flag of a menu. Stored as `1` (active) and `0` (disabled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuStatus {
    /// Shown to roles that hold the menu.
    Active,
    /// Hidden from role-scoped trees.
    Disabled,
}

impl MenuStatus {
    /// Returns the storage code.
    #[must_use]
    pub fn code(self) -> i16 {
        match self {
            Self::Active => 1,
            Self::Disabled => 0,
        }
    }

    /// Parses a storage code.
    pub fn from_code(code: i16) -> AppResult<Self> {
        match code {
            1 => Ok(Self::Active),
            0 => Ok(Self::Disabled),
            _ => Err(AppError::Validation(format!(
                "unknown menu status '{code}'"
            ))),
        }
    }
}

/// Mutable attributes of a menu, as supplied on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuAttributes {
    /// External parent menu id; `None` or empty makes the menu a root.
    pub parent_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Route path.
    pub path: Option<String>,
    /// Icon name.
    pub icon: Option<String>,
    /// Position among siblings, ascending.
    pub sort_order: i32,
    /// Entry kind.
    pub menu_type: Option<MenuType>,
    /// Permission string checked by the frontend.
    pub permission: Option<String>,
    /// Whether the entry is displayed.
    pub visible: bool,
    /// Activation flag; unset counts as active.
    pub status: Option<MenuStatus>,
}

/// A persisted navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    id: MenuId,
    menu_id: NonEmptyString,
    parent_id: Option<String>,
    name: NonEmptyString,
    path: Option<String>,
    icon: Option<String>,
    sort_order: i32,
    menu_type: Option<MenuType>,
    permission: Option<String>,
    visible: bool,
    status: Option<MenuStatus>,
}

impl Menu {
    /// Creates a validated menu.
    pub fn new(
        id: MenuId,
        menu_id: impl Into<String>,
        attributes: MenuAttributes,
    ) -> AppResult<Self> {
        let MenuAttributes {
            parent_id,
            name,
            path,
            icon,
            sort_order,
            menu_type,
            permission,
            visible,
            status,
        } = attributes;

        Ok(Self {
            id,
            menu_id: NonEmptyString::for_field("menu_id", menu_id)?,
            parent_id,
            name: NonEmptyString::for_field("name", name)?,
            path,
            icon,
            sort_order,
            menu_type,
            permission,
            visible,
            status,
        })
    }

    /// Returns a copy with every mutable attribute replaced.
    pub fn with_attributes(&self, attributes: MenuAttributes) -> AppResult<Self> {
        Self::new(self.id, self.menu_id.as_str(), attributes)
    }

    /// Moves the menu to a new position and parent.
    #[must_use]
    pub fn repositioned(mut self, sort_order: i32, parent_id: Option<String>) -> Self {
        self.sort_order = sort_order;
        self.parent_id = parent_id;
        self
    }

    /// Returns the internal identifier.
    #[must_use]
    pub fn id(&self) -> MenuId {
        self.id
    }

    /// Returns the external menu key.
    #[must_use]
    pub fn menu_id(&self) -> &str {
        self.menu_id.as_str()
    }

    /// Returns the external parent key, treating an empty key as absent.
    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|key| !key.is_empty())
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the route path.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns the icon name.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Returns the sibling ordering value.
    #[must_use]
    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    /// Returns the entry kind.
    #[must_use]
    pub fn menu_type(&self) -> Option<MenuType> {
        self.menu_type
    }

    /// Returns the permission string.
    #[must_use]
    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    /// Returns whether the entry is displayed.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Returns the activation flag.
    #[must_use]
    pub fn status(&self) -> Option<MenuStatus> {
        self.status
    }

    /// Returns whether the menu belongs in a role-scoped tree.
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        self.visible && self.status.is_none_or(|state| state == MenuStatus::Active)
    }
}

/// A menu together with its ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    menu: Menu,
    children: Vec<MenuNode>,
}

impl MenuNode {
    /// Returns the menu at this node.
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Returns the ordered children.
    #[must_use]
    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }

    /// Splits the node into its menu and children.
    #[must_use]
    pub fn into_parts(self) -> (Menu, Vec<MenuNode>) {
        (self.menu, self.children)
    }
}

/// Arranges menus into a forest, preserving input order for roots and siblings.
///
/// Parents are resolved by external `menu_id`, first occurrence wins. A menu
/// whose parent is absent, empty or unknown becomes a root. Menus that only
/// reach each other through a parent cycle have no root and are left out.
#[must_use]
pub fn build_menu_forest(menus: Vec<Menu>) -> Vec<MenuNode> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(menus.len());
    for (position, menu) in menus.iter().enumerate() {
        index.entry(menu.menu_id()).or_insert(position);
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); menus.len()];
    let mut roots = Vec::new();
    for (position, menu) in menus.iter().enumerate() {
        match menu.parent_id().and_then(|parent| index.get(parent)) {
            Some(&parent) => children[parent].push(position),
            None => roots.push(position),
        }
    }
    drop(index);

    let mut slots: Vec<Option<Menu>> = menus.into_iter().map(Some).collect();
    roots
        .into_iter()
        .filter_map(|root| assemble(root, &mut slots, &children))
        .collect()
}

fn assemble(
    position: usize,
    slots: &mut [Option<Menu>],
    children: &[Vec<usize>],
) -> Option<MenuNode> {
    let menu = slots[position].take()?;
    let children = children[position]
        .iter()
        .filter_map(|child| assemble(*child, slots, children))
        .collect();

    Some(MenuNode { menu, children })
}

/// Builds the administrative forest: every menu, siblings ascending by `sort_order`.
#[must_use]
pub fn build_full_menu_forest(mut menus: Vec<Menu>) -> Vec<MenuNode> {
    menus.sort_by_key(Menu::sort_order);
    build_menu_forest(menus)
}

/// Builds the forest a role sees.
///
/// Hidden and disabled menus are dropped before the forest is built, so the
/// children of a dropped menu surface as roots.
#[must_use]
pub fn build_visible_menu_forest(menus: Vec<Menu>) -> Vec<MenuNode> {
    let displayable = menus.into_iter().filter(Menu::is_displayable).collect();
    build_full_menu_forest(displayable)
}

/// Returns the external ids to delete for a cascade rooted at `root_menu_id`,
/// descendants before their parents and the root last.
///
/// Each id appears once even when the stored parent links form a cycle.
#[must_use]
pub fn cascade_deletion_order(root_menu_id: &str, menus: &[Menu]) -> Vec<String> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    collect_descendants(root_menu_id, menus, &mut visited, &mut order);
    order
}

fn collect_descendants<'a>(
    menu_id: &'a str,
    menus: &'a [Menu],
    visited: &mut HashSet<&'a str>,
    order: &mut Vec<String>,
) {
    if !visited.insert(menu_id) {
        return;
    }

    let parent = Some(menu_id);
    for child in menus.iter().filter(|menu| menu.parent_id() == parent) {
        collect_descendants(child.menu_id(), menus, visited, order);
    }

    order.push(menu_id.to_owned());
}

/// Generates an external menu id: `m-`, four hex characters of the name hash,
/// then the epoch milliseconds modulo 10000.
#[must_use]
pub fn generate_menu_id(name: &str, epoch_millis: i64) -> String {
    let digest = Sha256::digest(name.as_bytes());
    format!(
        "m-{:02x}{:02x}{}",
        digest[0],
        digest[1],
        epoch_millis.rem_euclid(10_000)
    )
}

#[cfg(test)]
mod tests;
