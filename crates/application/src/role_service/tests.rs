use std::sync::Arc;

use uuid::Uuid;

use inkpost_core::{AppError, AppResult};

use crate::test_support::FakeRoleRepository;
use crate::{CreateRoleInput, UpdateRoleInput};

use super::RoleService;

async fn service_with_menus(menu_ids: &[&str]) -> RoleService {
    let repository = FakeRoleRepository::default();
    repository
        .known_menu_ids
        .lock()
        .await
        .extend(menu_ids.iter().map(|menu_id| (*menu_id).to_owned()));
    RoleService::new(Arc::new(repository))
}

fn named(name: &str) -> CreateRoleInput {
    CreateRoleInput {
        name: name.to_owned(),
        ..CreateRoleInput::default()
    }
}

#[tokio::test]
async fn create_derives_key_from_name() -> AppResult<()> {
    let service = service_with_menus(&[]).await;

    let role = service.create_role(named("Content Editor")).await?;

    assert_eq!(role.role_id, "content-editor");
    assert_eq!(role.name, "Content Editor");
    Ok(())
}

#[tokio::test]
async fn create_rejects_blank_and_duplicate_names() -> AppResult<()> {
    let service = service_with_menus(&[]).await;
    service.create_role(named("Editor")).await?;

    let blank = service.create_role(named("   ")).await;
    let duplicate = service.create_role(named("Editor")).await;

    assert!(matches!(blank, Err(AppError::Validation(_))));
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    Ok(())
}

#[tokio::test]
async fn update_merges_description_and_name() -> AppResult<()> {
    let service = service_with_menus(&[]).await;
    let role = service
        .create_role(CreateRoleInput {
            description: Some("Writes posts".to_owned()),
            ..named("Writer")
        })
        .await?;

    let renamed = service
        .update_role(
            role.id,
            UpdateRoleInput {
                name: Some("Author".to_owned()),
                description: None,
            },
        )
        .await?;

    assert_eq!(renamed.name, "Author");
    assert_eq!(renamed.role_id, "writer");
    assert_eq!(renamed.description.as_deref(), Some("Writes posts"));
    Ok(())
}

#[tokio::test]
async fn replacing_menus_ignores_unknown_ids_and_clears_on_empty() -> AppResult<()> {
    let service = service_with_menus(&["m-posts", "m-users"]).await;
    let role = service.create_role(named("Editor")).await?;

    let assigned = service
        .replace_role_menus(
            role.id,
            &[
                "m-posts".to_owned(),
                "m-ghost".to_owned(),
                "m-users".to_owned(),
            ],
        )
        .await?;
    assert_eq!(assigned, vec!["m-posts", "m-users"]);

    let again = service
        .replace_role_menus(role.id, &["m-users".to_owned()])
        .await?;
    assert_eq!(again, vec!["m-users"]);

    let cleared = service.replace_role_menus(role.id, &[]).await?;
    assert!(cleared.is_empty());
    assert!(service.role_menu_ids(role.id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn unknown_roles_are_not_found() {
    let service = service_with_menus(&[]).await;

    assert!(matches!(
        service.delete_role(Uuid::new_v4()).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.role_menu_ids(Uuid::new_v4()).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service
            .update_role(Uuid::new_v4(), UpdateRoleInput::default())
            .await,
        Err(AppError::NotFound(_))
    ));
}
