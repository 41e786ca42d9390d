//! External identifier derivation shared by users, roles and organizations.

/// Lower-cases `value` and replaces every character outside `[a-z0-9-]` with `-`.
#[must_use]
pub fn slugify(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|character| {
            if character.is_ascii_lowercase() || character.is_ascii_digit() || character == '-' {
                character
            } else {
                '-'
            }
        })
        .collect()
}

/// Derives the base external user id from the local part of an email address.
#[must_use]
pub fn user_key_base(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let slug = slugify(local);
    if slug.is_empty() {
        "user".to_owned()
    } else {
        slug
    }
}

/// Returns the candidate key for the given collision attempt.
///
/// Attempt `0` is the base itself, later attempts append `-1`, `-2`, and so on.
#[must_use]
pub fn suffixed_key(base: &str, attempt: u32) -> String {
    if attempt == 0 {
        base.to_owned()
    } else {
        format!("{base}-{attempt}")
    }
}

/// Derives a role key from the role name, falling back to `role`.
#[must_use]
pub fn role_key(name: &str) -> String {
    let slug = slugify(name.trim());
    if slug.is_empty() {
        "role".to_owned()
    } else {
        slug
    }
}

/// Generates an organization key from its name and the current epoch milliseconds.
#[must_use]
pub fn generate_org_id(name: Option<&str>, epoch_millis: i64) -> String {
    match name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("{}-{}", slugify(name), epoch_millis.rem_euclid(10_000)),
        None => format!("org-{epoch_millis}"),
    }
}
