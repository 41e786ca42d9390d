use serde::{Deserialize, Serialize};
use ts_rs::TS;

mod conversions;

/// API representation of a menu row.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/menu-response.ts"
)]
pub struct MenuResponse {
    pub id: String,
    pub menu_id: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub path: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
    #[serde(rename = "type")]
    #[ts(type = "\"MENU\" | \"BUTTON\" | \"DIRECTORY\" | null")]
    pub menu_type: Option<String>,
    pub permission: Option<String>,
    pub visible: bool,
    pub status: Option<i16>,
}

/// A menu with its ordered children.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/menu-tree-response.ts"
)]
pub struct MenuTreeResponse {
    pub id: String,
    pub menu_id: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub path: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
    #[serde(rename = "type")]
    #[ts(type = "\"MENU\" | \"BUTTON\" | \"DIRECTORY\" | null")]
    pub menu_type: Option<String>,
    pub permission: Option<String>,
    pub visible: bool,
    pub status: Option<i16>,
    pub children: Vec<MenuTreeResponse>,
}

/// Incoming payload for menu creation.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-menu-request.ts"
)]
pub struct CreateMenuRequest {
    pub menu_id: Option<String>,
    pub parent_id: Option<String>,
    pub name: String,
    pub path: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
    #[serde(rename = "type")]
    pub menu_type: Option<String>,
    pub permission: Option<String>,
    pub visible: Option<bool>,
    pub status: Option<i16>,
}

/// Incoming payload for menu update. Every attribute is overwritten.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-menu-request.ts"
)]
pub struct UpdateMenuRequest {
    pub parent_id: Option<String>,
    pub name: String,
    pub path: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
    #[serde(rename = "type")]
    pub menu_type: Option<String>,
    pub permission: Option<String>,
    pub visible: Option<bool>,
    pub status: Option<i16>,
}

/// One entry of a bulk reorder.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/menu-sort-entry-request.ts"
)]
pub struct MenuSortEntryRequest {
    pub id: String,
    pub sort_order: Option<i32>,
    pub parent_id: Option<String>,
}

/// Result of a bulk reorder.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/menu-sort-response.ts"
)]
pub struct MenuSortResponse {
    pub updated: u32,
}

/// External ids removed by a cascading delete, descendants first.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/deleted-menus-response.ts"
)]
pub struct DeletedMenusResponse {
    pub deleted_menu_ids: Vec<String>,
}
