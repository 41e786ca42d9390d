//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod identifier;
mod menu;
mod user;

pub use identifier::{generate_org_id, role_key, slugify, suffixed_key, user_key_base};
pub use menu::{
    Menu, MenuAttributes, MenuId, MenuNode, MenuStatus, MenuType, build_full_menu_forest,
    build_menu_forest, build_visible_menu_forest, cascade_deletion_order, generate_menu_id,
};
pub use user::{
    AccountStatus, DEFAULT_ROLE_KEY, EMAIL_MAX_LENGTH, EmailAddress, INITIAL_SESSION_VERSION,
    PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH, UserId, validate_password,
};
