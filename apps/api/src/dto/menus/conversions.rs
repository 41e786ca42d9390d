use inkpost_application::{CreateMenuInput, MenuPosition};
use inkpost_core::AppError;
use inkpost_domain::{Menu, MenuAttributes, MenuNode, MenuStatus, MenuType};

use super::{
    CreateMenuRequest, MenuResponse, MenuSortEntryRequest, MenuTreeResponse, UpdateMenuRequest,
};

impl From<Menu> for MenuResponse {
    fn from(value: Menu) -> Self {
        Self {
            id: value.id().to_string(),
            menu_id: value.menu_id().to_owned(),
            parent_id: value.parent_id().map(ToOwned::to_owned),
            name: value.name().to_owned(),
            path: value.path().map(ToOwned::to_owned),
            icon: value.icon().map(ToOwned::to_owned),
            sort_order: value.sort_order(),
            menu_type: value.menu_type().map(|kind| kind.as_str().to_owned()),
            permission: value.permission().map(ToOwned::to_owned),
            visible: value.visible(),
            status: value.status().map(MenuStatus::code),
        }
    }
}

impl From<MenuNode> for MenuTreeResponse {
    fn from(value: MenuNode) -> Self {
        let (menu, children) = value.into_parts();
        let flat = MenuResponse::from(menu);

        Self {
            id: flat.id,
            menu_id: flat.menu_id,
            parent_id: flat.parent_id,
            name: flat.name,
            path: flat.path,
            icon: flat.icon,
            sort_order: flat.sort_order,
            menu_type: flat.menu_type,
            permission: flat.permission,
            visible: flat.visible,
            status: flat.status,
            children: children.into_iter().map(Self::from).collect(),
        }
    }
}

impl TryFrom<CreateMenuRequest> for CreateMenuInput {
    type Error = AppError;

    fn try_from(value: CreateMenuRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            menu_id: value.menu_id,
            parent_id: value.parent_id,
            name: value.name,
            path: value.path,
            icon: value.icon,
            sort_order: value.sort_order,
            menu_type: parse_menu_type(value.menu_type)?,
            permission: value.permission,
            visible: value.visible,
            status: parse_status(value.status)?,
        })
    }
}

/// Omitted `visible` and `sortOrder` reset to `false` and `0`.
impl TryFrom<UpdateMenuRequest> for MenuAttributes {
    type Error = AppError;

    fn try_from(value: UpdateMenuRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            parent_id: value.parent_id,
            name: value.name,
            path: value.path,
            icon: value.icon,
            sort_order: value.sort_order.unwrap_or(0),
            menu_type: parse_menu_type(value.menu_type)?,
            permission: value.permission,
            visible: value.visible.unwrap_or(false),
            status: parse_status(value.status)?,
        })
    }
}

impl From<MenuSortEntryRequest> for MenuPosition {
    fn from(value: MenuSortEntryRequest) -> Self {
        Self {
            id: value.id,
            sort_order: value.sort_order,
            parent_id: value.parent_id,
        }
    }
}

fn parse_menu_type(value: Option<String>) -> Result<Option<MenuType>, AppError> {
    value
        .filter(|menu_type| !menu_type.trim().is_empty())
        .map(|menu_type| MenuType::parse(menu_type.trim().to_uppercase().as_str()))
        .transpose()
}

fn parse_status(value: Option<i16>) -> Result<Option<MenuStatus>, AppError> {
    value.map(MenuStatus::from_code).transpose()
}
