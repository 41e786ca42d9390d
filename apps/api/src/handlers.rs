use inkpost_core::AppError;
use uuid::Uuid;

pub mod health;
pub mod menus;
pub mod organizations;
pub mod roles;
pub mod stats;
pub mod users;

fn parse_uuid(value: &str, label: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value)
        .map_err(|_| AppError::Validation(format!("invalid {label} id '{value}'")))
}
