use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use inkpost_core::{AppError, AppResult};
use inkpost_domain::{AccountStatus, UserId};

use crate::test_support::{
    FakeOrganizationRepository, FakeRoleRepository, FakeTokenCodec, FakeUserRepository,
    PlainPasswordHasher,
};
use crate::{AuthService, CreateUserInput, OrganizationRecord, UpdateUserInput, UserProfile};

use super::UserService;

const PASSWORD: &str = "a-long-enough-secret";

struct Harness {
    users: UserService,
    auth: AuthService,
}

async fn harness() -> Harness {
    let user_repository = Arc::new(FakeUserRepository::default());
    let role_repository = Arc::new(
        FakeRoleRepository::default()
            .with_role("user", "user")
            .await
            .with_role("editor", "Editor")
            .await,
    );
    let organizations = FakeOrganizationRepository::default();
    let now = Utc::now();
    organizations
        .organizations
        .lock()
        .await
        .push(OrganizationRecord {
            id: Uuid::new_v4(),
            org_id: "newsroom-1234".to_owned(),
            parent_org_id: None,
            name: "Newsroom".to_owned(),
            description: None,
            created_at: now,
            updated_at: now,
        });
    let password_hasher = Arc::new(PlainPasswordHasher);

    Harness {
        users: UserService::new(
            user_repository.clone(),
            role_repository.clone(),
            Arc::new(organizations),
            password_hasher.clone(),
        ),
        auth: AuthService::new(
            user_repository,
            role_repository,
            password_hasher,
            Arc::new(FakeTokenCodec::default()),
        ),
    }
}

fn create_input(email: &str) -> CreateUserInput {
    CreateUserInput {
        email: email.to_owned(),
        password: PASSWORD.to_owned(),
        ..CreateUserInput::default()
    }
}

#[tokio::test]
async fn create_assigns_default_role_and_derived_id() -> AppResult<()> {
    let harness = harness().await;

    let user = harness
        .users
        .create_user(create_input("Ops+Team@example.com"))
        .await?;

    assert_eq!(user.user_id, "ops-team");
    assert_eq!(user.role_id.as_deref(), Some("user"));
    assert_eq!(user.status, AccountStatus::Enabled);
    Ok(())
}

#[tokio::test]
async fn create_keeps_explicit_user_id_and_resolves_organization() -> AppResult<()> {
    let harness = harness().await;

    let user = harness
        .users
        .create_user(CreateUserInput {
            user_id: Some("admin".to_owned()),
            role_id: Some("editor".to_owned()),
            org_id: Some("newsroom-1234".to_owned()),
            ..create_input("admin@example.com")
        })
        .await?;

    assert_eq!(user.user_id, "admin");
    assert_eq!(user.role_id.as_deref(), Some("editor"));
    assert_eq!(user.organization.as_deref(), Some("Newsroom"));
    Ok(())
}

#[tokio::test]
async fn create_rejects_unknown_role() {
    let harness = harness().await;

    let result = harness
        .users
        .create_user(CreateUserInput {
            role_id: Some("ghost".to_owned()),
            ..create_input("someone@example.com")
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(message)) if message == "invalid role"
    ));
}

#[tokio::test]
async fn create_requires_default_role_when_none_given() {
    let service = UserService::new(
        Arc::new(FakeUserRepository::default()),
        Arc::new(FakeRoleRepository::default()),
        Arc::new(FakeOrganizationRepository::default()),
        Arc::new(PlainPasswordHasher),
    );

    let result = service
        .create_user(create_input("someone@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn create_rejects_duplicate_email_and_empty_password() -> AppResult<()> {
    let harness = harness().await;
    harness
        .users
        .create_user(create_input("someone@example.com"))
        .await?;

    let duplicate = harness
        .users
        .create_user(create_input("someone@example.com"))
        .await;
    let empty_password = harness
        .users
        .create_user(CreateUserInput {
            password: String::new(),
            ..create_input("other@example.com")
        })
        .await;

    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    assert!(matches!(empty_password, Err(AppError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn update_merges_only_supplied_fields() -> AppResult<()> {
    let harness = harness().await;
    let user = harness
        .users
        .create_user(CreateUserInput {
            profile: UserProfile {
                name: Some("Jo".to_owned()),
                bio: Some("Writes things".to_owned()),
                ..UserProfile::default()
            },
            ..create_input("jo@example.com")
        })
        .await?;

    let updated = harness
        .users
        .update_user(
            user.id,
            UpdateUserInput {
                profile: UserProfile {
                    job_title: Some("Editor".to_owned()),
                    ..UserProfile::default()
                },
                org_id: Some("newsroom-1234".to_owned()),
                ..UpdateUserInput::default()
            },
        )
        .await?;

    assert_eq!(updated.name.as_deref(), Some("Jo"));
    assert_eq!(updated.bio.as_deref(), Some("Writes things"));
    assert_eq!(updated.job_title.as_deref(), Some("Editor"));
    assert_eq!(updated.org_id.as_deref(), Some("newsroom-1234"));
    assert_eq!(updated.password_hash, user.password_hash);
    Ok(())
}

#[tokio::test]
async fn update_rehashes_non_empty_passwords_only() -> AppResult<()> {
    let harness = harness().await;
    let user = harness
        .users
        .create_user(create_input("jo@example.com"))
        .await?;

    let unchanged = harness
        .users
        .update_user(
            user.id,
            UpdateUserInput {
                password: Some(String::new()),
                ..UpdateUserInput::default()
            },
        )
        .await?;
    let changed = harness
        .users
        .update_user(
            user.id,
            UpdateUserInput {
                password: Some("a-brand-new-secret".to_owned()),
                ..UpdateUserInput::default()
            },
        )
        .await?;

    assert_eq!(unchanged.password_hash, user.password_hash);
    assert_eq!(changed.password_hash, "hashed:a-brand-new-secret");
    Ok(())
}

#[tokio::test]
async fn disabling_a_user_revokes_their_tokens() -> AppResult<()> {
    let harness = harness().await;
    let user = harness
        .users
        .create_user(create_input("jo@example.com"))
        .await?;
    let outcome = harness.auth.login("jo@example.com", PASSWORD).await?;
    assert!(
        harness
            .auth
            .authenticate(&outcome.session.token)
            .await?
            .is_some()
    );

    harness
        .users
        .update_user(
            user.id,
            UpdateUserInput {
                status: Some(AccountStatus::Disabled),
                ..UpdateUserInput::default()
            },
        )
        .await?;

    assert!(
        harness
            .auth
            .authenticate(&outcome.session.token)
            .await?
            .is_none()
    );
    Ok(())
}

#[tokio::test]
async fn search_with_blank_keyword_lists_everyone() -> AppResult<()> {
    let harness = harness().await;
    harness
        .users
        .create_user(CreateUserInput {
            profile: UserProfile {
                name: Some("Alice Writer".to_owned()),
                ..UserProfile::default()
            },
            ..create_input("alice@example.com")
        })
        .await?;
    harness
        .users
        .create_user(create_input("bob@example.com"))
        .await?;

    assert_eq!(harness.users.search_users(Some("  ")).await?.len(), 2);
    assert_eq!(harness.users.search_users(None).await?.len(), 2);

    let found = harness.users.search_users(Some("WRITER")).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].email, "alice@example.com");
    Ok(())
}

#[tokio::test]
async fn missing_users_are_not_found() {
    let harness = harness().await;

    assert!(matches!(
        harness.users.get_user(UserId::new()).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        harness.users.get_user_by_user_id("ghost").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        harness.users.delete_user(UserId::new()).await,
        Err(AppError::NotFound(_))
    ));
}
