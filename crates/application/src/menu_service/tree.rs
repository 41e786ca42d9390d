use super::*;

impl MenuService {
    /// Returns the forest visible to a user's role.
    ///
    /// `user_ref` is the external user id or the internal UUID. Users without
    /// a role see an empty forest.
    pub async fn menus_for_user(&self, user_ref: &str) -> AppResult<Vec<MenuNode>> {
        let mut user = self.user_repository.find_by_user_id(user_ref).await?;
        if user.is_none()
            && let Ok(id) = Uuid::parse_str(user_ref)
        {
            user = self
                .user_repository
                .find_by_id(UserId::from_uuid(id))
                .await?;
        }

        let Some(user) = user else {
            return Err(AppError::NotFound(format!(
                "user '{user_ref}' does not exist"
            )));
        };

        let Some(role_id) = user.role_id else {
            return Ok(Vec::new());
        };

        let menus = self.menu_repository.list_menus_for_role(&role_id).await?;
        Ok(build_visible_menu_forest(menus))
    }

    /// Returns every menu arranged as a forest.
    pub async fn full_tree(&self) -> AppResult<Vec<MenuNode>> {
        Ok(build_full_menu_forest(
            self.menu_repository.list_menus().await?,
        ))
    }

    /// Returns every menu as a flat list ordered by `sort_order`.
    pub async fn list_menus(&self) -> AppResult<Vec<Menu>> {
        self.menu_repository.list_menus().await
    }
}
