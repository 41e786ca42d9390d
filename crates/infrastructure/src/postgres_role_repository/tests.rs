use chrono::Utc;
use inkpost_application::{MenuRepository, RoleRecord, RoleRepository};
use inkpost_domain::{Menu, MenuAttributes, MenuId};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use super::PostgresRoleRepository;
use crate::PostgresMenuRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres role tests: {error}");
    }

    Some(pool)
}

fn role(tag: &str) -> RoleRecord {
    let now = Utc::now();
    RoleRecord {
        id: Uuid::new_v4(),
        role_id: format!("role-{tag}"),
        name: format!("Role {tag}"),
        description: None,
        created_at: now,
        updated_at: now,
    }
}

fn menu(menu_id: &str) -> Menu {
    match Menu::new(
        MenuId::new(),
        menu_id,
        MenuAttributes {
            parent_id: None,
            name: menu_id.to_owned(),
            path: None,
            icon: None,
            sort_order: 0,
            menu_type: None,
            permission: None,
            visible: true,
            status: None,
        },
    ) {
        Ok(menu) => menu,
        Err(error) => panic!("invalid test menu: {error}"),
    }
}

#[tokio::test]
async fn replacing_menus_keeps_only_existing_ids() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let roles = PostgresRoleRepository::new(pool.clone());
    let menus = PostgresMenuRepository::new(pool);
    let tag = Uuid::new_v4().simple().to_string();
    let first = format!("m-{tag}-a");
    let second = format!("m-{tag}-b");
    assert!(menus.create_menu(&menu(&first)).await.is_ok());
    assert!(menus.create_menu(&menu(&second)).await.is_ok());
    let created = roles.create_role(role(&tag)).await;
    let Ok(created) = created else {
        panic!("failed to create role");
    };

    let replaced = roles
        .replace_role_menus(
            created.id,
            &[first.clone(), format!("m-{tag}-ghost"), second.clone()],
        )
        .await;
    assert!(replaced.is_ok());
    let assigned = roles.list_role_menu_ids(created.id).await;
    assert!(matches!(assigned, Ok(ref ids) if ids.len() == 2));

    let for_role = menus.list_menus_for_role(&created.role_id).await;
    assert!(matches!(for_role, Ok(ref menus) if menus.len() == 2));

    let deleted = menus.delete_menus(std::slice::from_ref(&first)).await;
    assert!(deleted.is_ok());
    let assigned = roles.list_role_menu_ids(created.id).await;
    assert!(matches!(assigned, Ok(ref ids) if ids == &vec![second.clone()]));

    assert!(roles.replace_role_menus(created.id, &[]).await.is_ok());
    let assigned = roles.list_role_menu_ids(created.id).await;
    assert!(matches!(assigned, Ok(ref ids) if ids.is_empty()));
}

#[tokio::test]
async fn duplicate_role_name_is_a_conflict() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let roles = PostgresRoleRepository::new(pool);
    let tag = Uuid::new_v4().simple().to_string();
    assert!(roles.create_role(role(&tag)).await.is_ok());

    let duplicate = RoleRecord {
        id: Uuid::new_v4(),
        role_id: format!("other-{tag}"),
        ..role(&tag)
    };

    assert!(matches!(
        roles.create_role(duplicate).await,
        Err(inkpost_core::AppError::Conflict(_))
    ));
}
