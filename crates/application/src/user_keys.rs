use inkpost_core::{AppError, AppResult};
use inkpost_domain::{DEFAULT_ROLE_KEY, suffixed_key, user_key_base};

use crate::{RoleRepository, UserRepository};

const MAX_USER_KEY_ATTEMPTS: u32 = 1000;

/// Picks the first free external user id derived from the email local part.
pub(crate) async fn allocate_user_key(
    user_repository: &dyn UserRepository,
    email: &str,
) -> AppResult<String> {
    let base = user_key_base(email);
    for attempt in 0..MAX_USER_KEY_ATTEMPTS {
        let candidate = suffixed_key(&base, attempt);
        if user_repository
            .find_by_user_id(&candidate)
            .await?
            .is_none()
        {
            return Ok(candidate);
        }
    }

    Err(AppError::Conflict(format!(
        "no free user id derived from '{base}'"
    )))
}

/// Returns the default role key when that role exists.
pub(crate) async fn default_role_key(
    role_repository: &dyn RoleRepository,
) -> AppResult<Option<String>> {
    Ok(role_repository
        .find_role_by_key(DEFAULT_ROLE_KEY)
        .await?
        .map(|role| role.role_id))
}
