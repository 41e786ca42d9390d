use super::*;

const MAX_GENERATED_ID_ATTEMPTS: i64 = 8;

impl MenuService {
    /// Creates a menu, generating its external id when none is supplied.
    pub async fn create_menu(&self, input: CreateMenuInput) -> AppResult<Menu> {
        let menu_id = match input
            .menu_id
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
        {
            Some(menu_id) => {
                if self.menu_repository.menu_id_exists(&menu_id).await? {
                    return Err(AppError::Conflict(format!(
                        "menu id '{menu_id}' already exists"
                    )));
                }
                menu_id
            }
            None => self.generate_free_menu_id(&input.name).await?,
        };

        let menu = Menu::new(
            MenuId::new(),
            menu_id,
            MenuAttributes {
                parent_id: input.parent_id,
                name: input.name,
                path: input.path,
                icon: input.icon,
                sort_order: input.sort_order.unwrap_or(0),
                menu_type: input.menu_type,
                permission: input.permission,
                visible: input.visible.unwrap_or(true),
                status: Some(input.status.unwrap_or(MenuStatus::Active)),
            },
        )?;

        self.menu_repository.create_menu(&menu).await?;
        Ok(menu)
    }

    async fn generate_free_menu_id(&self, name: &str) -> AppResult<String> {
        let epoch_millis = Utc::now().timestamp_millis();
        for attempt in 0..MAX_GENERATED_ID_ATTEMPTS {
            let candidate = generate_menu_id(name, epoch_millis + attempt);
            if !self.menu_repository.menu_id_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(AppError::Conflict(
            "could not generate a free menu id, retry the request".to_owned(),
        ))
    }

    /// Overwrites every mutable attribute of a menu.
    pub async fn update_menu(&self, id: MenuId, attributes: MenuAttributes) -> AppResult<Menu> {
        let existing = self
            .menu_repository
            .find_menu(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("menu '{id}' does not exist")))?;

        let menu = existing.with_attributes(attributes)?;
        self.menu_repository.save_menu(&menu).await?;
        Ok(menu)
    }

    /// Deletes a menu and all of its descendants.
    ///
    /// Returns the deleted external ids, children before parents, or `None`
    /// when the menu does not exist.
    pub async fn delete_menu(&self, id: MenuId) -> AppResult<Option<Vec<String>>> {
        let Some(menu) = self.menu_repository.find_menu(id).await? else {
            return Ok(None);
        };

        let menus = self.menu_repository.list_menus().await?;
        let doomed = cascade_deletion_order(menu.menu_id(), &menus);
        self.menu_repository.delete_menus(&doomed).await?;

        Ok(Some(doomed))
    }

    /// Applies a batch of new positions, skipping malformed and unknown ids.
    ///
    /// Returns how many menus were moved.
    pub async fn reorder_menus(&self, positions: Vec<MenuPosition>) -> AppResult<usize> {
        let mut moved = 0;
        for position in positions {
            let Some(id) = MenuId::parse(&position.id) else {
                continue;
            };
            let Some(menu) = self.menu_repository.find_menu(id).await? else {
                continue;
            };

            let sort_order = position.sort_order.unwrap_or(menu.sort_order());
            let menu = menu.repositioned(sort_order, position.parent_id);
            self.menu_repository.save_menu(&menu).await?;
            moved += 1;
        }

        Ok(moved)
    }
}
