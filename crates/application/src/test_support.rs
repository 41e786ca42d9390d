//! In-memory fakes for service tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use inkpost_core::{AppError, AppResult, UserIdentity};
use inkpost_domain::{Menu, MenuId, UserId};

use crate::{
    DailySiteStats, IssuedSessionToken, MenuRepository, NewUser, OrganizationRecord,
    OrganizationRepository, PasswordHasher, RoleRecord, RoleRepository, SessionTokenCodec,
    SiteStatsRepository, SiteStatsTotals, UserRecord, UserRepository, VisitorRegistry,
};

#[derive(Default)]
pub(crate) struct FakeUserRepository {
    pub(crate) users: Mutex<Vec<UserRecord>>,
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        Ok(self.users.lock().await.clone())
    }

    async fn search_users(&self, keyword: &str) -> AppResult<Vec<UserRecord>> {
        let keyword = keyword.to_lowercase();
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .filter(|user| {
                user.email.contains(&keyword)
                    || user
                        .name
                        .as_deref()
                        .is_some_and(|name| name.to_lowercase().contains(&keyword))
            })
            .cloned()
            .collect())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<UserRecord>> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<UserRecord>> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|user| user.user_id == user_id)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> AppResult<UserRecord> {
        let mut users = self.users.lock().await;
        if users
            .iter()
            .any(|existing| existing.email == user.email || existing.user_id == user.user_id)
        {
            return Err(AppError::Conflict("user already exists".to_owned()));
        }

        let now = Utc::now();
        let record = UserRecord {
            id: user.id,
            user_id: user.user_id,
            email: user.email,
            password_hash: user.password_hash,
            name: user.profile.name,
            role_name: user.role_id.clone(),
            role_id: user.role_id,
            org_id: user.org_id,
            organization: user.organization,
            avatar: user.profile.avatar,
            bio: user.profile.bio,
            website: user.profile.website,
            job_title: user.profile.job_title,
            phone: user.profile.phone,
            status: user.status,
            session_version: 1,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn save_user(&self, user: &UserRecord) -> AppResult<UserRecord> {
        let mut users = self.users.lock().await;
        let Some(existing) = users.iter_mut().find(|existing| existing.id == user.id) else {
            let id = &user.id;
            return Err(AppError::NotFound(format!("user '{id}' does not exist")));
        };

        // Session version is only ever changed through bump_session_version.
        let session_version = existing.session_version;
        *existing = user.clone();
        existing.session_version = session_version;
        existing.role_name = existing.role_id.clone();
        Ok(existing.clone())
    }

    async fn delete_user(&self, id: UserId) -> AppResult<bool> {
        let mut users = self.users.lock().await;
        let before = users.len();
        users.retain(|user| user.id != id);
        Ok(users.len() != before)
    }

    async fn bump_session_version(&self, id: UserId, stamp_login: bool) -> AppResult<i32> {
        let mut users = self.users.lock().await;
        let Some(user) = users.iter_mut().find(|user| user.id == id) else {
            return Err(AppError::NotFound(format!("user '{id}' does not exist")));
        };

        user.session_version += 1;
        if stamp_login {
            user.last_login_at = Some(Utc::now());
        }
        Ok(user.session_version)
    }
}

#[derive(Default)]
pub(crate) struct FakeRoleRepository {
    pub(crate) roles: Mutex<Vec<RoleRecord>>,
    pub(crate) role_menus: Mutex<HashMap<Uuid, Vec<String>>>,
    pub(crate) known_menu_ids: Mutex<HashSet<String>>,
}

impl FakeRoleRepository {
    pub(crate) async fn with_role(self, role_id: &str, name: &str) -> Self {
        let now = Utc::now();
        self.roles.lock().await.push(RoleRecord {
            id: Uuid::new_v4(),
            role_id: role_id.to_owned(),
            name: name.to_owned(),
            description: None,
            created_at: now,
            updated_at: now,
        });
        self
    }
}

#[async_trait]
impl RoleRepository for FakeRoleRepository {
    async fn list_roles(&self) -> AppResult<Vec<RoleRecord>> {
        Ok(self.roles.lock().await.clone())
    }

    async fn find_role(&self, id: Uuid) -> AppResult<Option<RoleRecord>> {
        Ok(self
            .roles
            .lock()
            .await
            .iter()
            .find(|role| role.id == id)
            .cloned())
    }

    async fn find_role_by_key(&self, role_id: &str) -> AppResult<Option<RoleRecord>> {
        Ok(self
            .roles
            .lock()
            .await
            .iter()
            .find(|role| role.role_id == role_id)
            .cloned())
    }

    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<RoleRecord>> {
        Ok(self
            .roles
            .lock()
            .await
            .iter()
            .find(|role| role.name == name)
            .cloned())
    }

    async fn create_role(&self, role: RoleRecord) -> AppResult<RoleRecord> {
        let mut roles = self.roles.lock().await;
        if roles
            .iter()
            .any(|existing| existing.role_id == role.role_id || existing.name == role.name)
        {
            return Err(AppError::Conflict("role already exists".to_owned()));
        }
        roles.push(role.clone());
        Ok(role)
    }

    async fn save_role(&self, role: &RoleRecord) -> AppResult<RoleRecord> {
        let mut roles = self.roles.lock().await;
        let Some(existing) = roles.iter_mut().find(|existing| existing.id == role.id) else {
            let id = &role.id;
            return Err(AppError::NotFound(format!("role '{id}' does not exist")));
        };
        *existing = role.clone();
        Ok(role.clone())
    }

    async fn delete_role(&self, id: Uuid) -> AppResult<bool> {
        let mut roles = self.roles.lock().await;
        let before = roles.len();
        roles.retain(|role| role.id != id);
        self.role_menus.lock().await.remove(&id);
        Ok(roles.len() != before)
    }

    async fn list_role_menu_ids(&self, id: Uuid) -> AppResult<Vec<String>> {
        Ok(self
            .role_menus
            .lock()
            .await
            .get(&id)
            .cloned()
            .unwrap_or_default())
    }

    async fn replace_role_menus(&self, id: Uuid, menu_ids: &[String]) -> AppResult<()> {
        let known = self.known_menu_ids.lock().await;
        let mut assigned: Vec<String> = Vec::new();
        for menu_id in menu_ids {
            if known.contains(menu_id) && !assigned.contains(menu_id) {
                assigned.push(menu_id.clone());
            }
        }
        self.role_menus.lock().await.insert(id, assigned);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeMenuRepository {
    pub(crate) menus: Mutex<Vec<Menu>>,
    pub(crate) role_menus: Mutex<HashMap<String, Vec<String>>>,
}

#[async_trait]
impl MenuRepository for FakeMenuRepository {
    async fn list_menus(&self) -> AppResult<Vec<Menu>> {
        let mut menus = self.menus.lock().await.clone();
        menus.sort_by_key(Menu::sort_order);
        Ok(menus)
    }

    async fn list_menus_for_role(&self, role_id: &str) -> AppResult<Vec<Menu>> {
        let assigned = self
            .role_menus
            .lock()
            .await
            .get(role_id)
            .cloned()
            .unwrap_or_default();
        Ok(self
            .menus
            .lock()
            .await
            .iter()
            .filter(|menu| assigned.iter().any(|menu_id| menu_id == menu.menu_id()))
            .cloned()
            .collect())
    }

    async fn find_menu(&self, id: MenuId) -> AppResult<Option<Menu>> {
        Ok(self
            .menus
            .lock()
            .await
            .iter()
            .find(|menu| menu.id() == id)
            .cloned())
    }

    async fn menu_id_exists(&self, menu_id: &str) -> AppResult<bool> {
        Ok(self
            .menus
            .lock()
            .await
            .iter()
            .any(|menu| menu.menu_id() == menu_id))
    }

    async fn create_menu(&self, menu: &Menu) -> AppResult<()> {
        let mut menus = self.menus.lock().await;
        if menus.iter().any(|known| known.menu_id() == menu.menu_id()) {
            return Err(AppError::Conflict("menu already exists".to_owned()));
        }
        menus.push(menu.clone());
        Ok(())
    }

    async fn save_menu(&self, menu: &Menu) -> AppResult<()> {
        let mut menus = self.menus.lock().await;
        let Some(existing) = menus.iter_mut().find(|existing| existing.id() == menu.id()) else {
            let id = menu.id();
            return Err(AppError::NotFound(format!("menu '{id}' does not exist")));
        };
        *existing = menu.clone();
        Ok(())
    }

    async fn delete_menus(&self, menu_ids: &[String]) -> AppResult<()> {
        self.menus
            .lock()
            .await
            .retain(|menu| !menu_ids.iter().any(|menu_id| menu_id == menu.menu_id()));
        for assigned in self.role_menus.lock().await.values_mut() {
            assigned.retain(|menu_id| !menu_ids.contains(menu_id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeOrganizationRepository {
    pub(crate) organizations: Mutex<Vec<OrganizationRecord>>,
}

#[async_trait]
impl OrganizationRepository for FakeOrganizationRepository {
    async fn list_organizations(&self) -> AppResult<Vec<OrganizationRecord>> {
        Ok(self.organizations.lock().await.clone())
    }

    async fn find_organization(&self, id: Uuid) -> AppResult<Option<OrganizationRecord>> {
        Ok(self
            .organizations
            .lock()
            .await
            .iter()
            .find(|organization| organization.id == id)
            .cloned())
    }

    async fn find_organization_by_key(
        &self,
        org_id: &str,
    ) -> AppResult<Option<OrganizationRecord>> {
        Ok(self
            .organizations
            .lock()
            .await
            .iter()
            .find(|organization| organization.org_id == org_id)
            .cloned())
    }

    async fn create_organization(
        &self,
        organization: OrganizationRecord,
    ) -> AppResult<OrganizationRecord> {
        let mut organizations = self.organizations.lock().await;
        if organizations
            .iter()
            .any(|existing| existing.org_id == organization.org_id)
        {
            return Err(AppError::Conflict("organization already exists".to_owned()));
        }
        organizations.push(organization.clone());
        Ok(organization)
    }

    async fn save_organization(
        &self,
        organization: &OrganizationRecord,
    ) -> AppResult<OrganizationRecord> {
        let mut organizations = self.organizations.lock().await;
        let Some(existing) = organizations
            .iter_mut()
            .find(|existing| existing.id == organization.id)
        else {
            return Err(AppError::NotFound("organization does not exist".to_owned()));
        };
        *existing = organization.clone();
        Ok(organization.clone())
    }

    async fn delete_organization(&self, id: Uuid) -> AppResult<bool> {
        let mut organizations = self.organizations.lock().await;
        let before = organizations.len();
        organizations.retain(|organization| organization.id != id);
        Ok(organizations.len() != before)
    }
}

/// Stores passwords as `hashed:<password>`.
pub(crate) struct PlainPasswordHasher;

impl PasswordHasher for PlainPasswordHasher {
    fn hash_password(&self, password: &str) -> AppResult<String> {
        Ok(format!("hashed:{password}"))
    }

    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        Ok(hash.strip_prefix("hashed:") == Some(password))
    }
}

/// Encodes claims in plain text, separated by `|`, with a nonce per token.
#[derive(Default)]
pub(crate) struct FakeTokenCodec {
    nonce: AtomicU64,
}

impl SessionTokenCodec for FakeTokenCodec {
    fn issue(&self, identity: &UserIdentity) -> AppResult<IssuedSessionToken> {
        let nonce = self.nonce.fetch_add(1, Ordering::Relaxed);
        Ok(IssuedSessionToken {
            token: format!(
                "{}|{}|{}|{}|{nonce}",
                identity.user_id(),
                identity.email(),
                identity.role_name().unwrap_or_default(),
                identity.session_version()
            ),
            expires_at: Utc::now(),
        })
    }

    fn verify(&self, token: &str) -> Option<UserIdentity> {
        let parts: Vec<&str> = token.split('|').collect();
        let [user_id, email, role_name, version, _nonce] = parts.as_slice() else {
            return None;
        };
        let role_name = (!role_name.is_empty()).then(|| (*role_name).to_owned());
        Some(UserIdentity::new(
            *user_id,
            *email,
            role_name,
            version.parse().ok()?,
        ))
    }
}

#[derive(Default)]
pub(crate) struct FakeSiteStatsRepository {
    pub(crate) days: Mutex<Vec<DailySiteStats>>,
}

#[async_trait]
impl SiteStatsRepository for FakeSiteStatsRepository {
    async fn increment(
        &self,
        day: NaiveDate,
        page_views: i64,
        unique_visitors: i64,
    ) -> AppResult<()> {
        let mut days = self.days.lock().await;
        if let Some(existing) = days.iter_mut().find(|stats| stats.day == day) {
            existing.page_views += page_views;
            existing.unique_visitors += unique_visitors;
        } else {
            days.push(DailySiteStats {
                day,
                page_views,
                unique_visitors,
            });
        }
        Ok(())
    }

    async fn find_day(&self, day: NaiveDate) -> AppResult<Option<DailySiteStats>> {
        Ok(self
            .days
            .lock()
            .await
            .iter()
            .find(|stats| stats.day == day)
            .copied())
    }

    async fn totals(&self) -> AppResult<SiteStatsTotals> {
        Ok(self
            .days
            .lock()
            .await
            .iter()
            .fold(SiteStatsTotals::default(), |totals, stats| SiteStatsTotals {
                page_views: totals.page_views + stats.page_views,
                unique_visitors: totals.unique_visitors + stats.unique_visitors,
            }))
    }

    async fn list_since(&self, since: NaiveDate) -> AppResult<Vec<DailySiteStats>> {
        let mut days: Vec<DailySiteStats> = self
            .days
            .lock()
            .await
            .iter()
            .filter(|stats| stats.day >= since)
            .copied()
            .collect();
        days.sort_by(|left, right| right.day.cmp(&left.day));
        Ok(days)
    }
}

#[derive(Default)]
pub(crate) struct FakeVisitorRegistry {
    seen: Mutex<HashSet<(NaiveDate, String)>>,
}

#[async_trait]
impl VisitorRegistry for FakeVisitorRegistry {
    async fn register_visit(&self, day: NaiveDate, visitor: &str) -> AppResult<bool> {
        Ok(self.seen.lock().await.insert((day, visitor.to_owned())))
    }
}
