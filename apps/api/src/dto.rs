//! Transport types. Field names are camelCase on the wire.

mod auth;
mod common;
mod menus;
mod organizations;
mod roles;
mod stats;
mod users;

pub use auth::{AuthLoginRequest, AuthLoginResponse, AuthRegisterRequest, CurrentUserResponse};
pub use common::{GenericMessageResponse, HealthDependencyStatus, HealthResponse};
pub use menus::{
    CreateMenuRequest, DeletedMenusResponse, MenuResponse, MenuSortEntryRequest, MenuSortResponse,
    MenuTreeResponse, UpdateMenuRequest,
};
pub use organizations::{
    CreateOrganizationRequest, OrganizationResponse, UpdateOrganizationRequest,
};
pub use roles::{CreateRoleRequest, RoleMenusPayload, RoleResponse, UpdateRoleRequest};
pub use stats::{DailySiteStatsResponse, RecentStatsQuery, SiteStatsOverviewResponse};
pub use users::{CreateUserRequest, UpdateUserRequest, UserResponse, UserSearchQuery};

#[cfg(test)]
mod tests {
    use super::{
        AuthLoginRequest, AuthLoginResponse, AuthRegisterRequest, CreateMenuRequest,
        CreateOrganizationRequest, CreateRoleRequest, CreateUserRequest, CurrentUserResponse,
        DailySiteStatsResponse, DeletedMenusResponse, GenericMessageResponse,
        HealthDependencyStatus, HealthResponse, MenuResponse, MenuSortEntryRequest,
        MenuSortResponse, MenuTreeResponse, OrganizationResponse, RoleMenusPayload, RoleResponse,
        SiteStatsOverviewResponse, UpdateMenuRequest, UpdateOrganizationRequest, UpdateRoleRequest,
        UpdateUserRequest, UserResponse,
    };

    use crate::error::ErrorResponse;
    use ts_rs::Config;
    use ts_rs::TS;

    #[test]
    fn export_ts_bindings() -> Result<(), ts_rs::ExportError> {
        let config = Config::default();

        AuthRegisterRequest::export(&config)?;
        AuthLoginRequest::export(&config)?;
        AuthLoginResponse::export(&config)?;
        CurrentUserResponse::export(&config)?;
        GenericMessageResponse::export(&config)?;
        HealthResponse::export(&config)?;
        HealthDependencyStatus::export(&config)?;
        ErrorResponse::export(&config)?;
        MenuResponse::export(&config)?;
        MenuTreeResponse::export(&config)?;
        CreateMenuRequest::export(&config)?;
        UpdateMenuRequest::export(&config)?;
        MenuSortEntryRequest::export(&config)?;
        MenuSortResponse::export(&config)?;
        DeletedMenusResponse::export(&config)?;
        RoleResponse::export(&config)?;
        CreateRoleRequest::export(&config)?;
        UpdateRoleRequest::export(&config)?;
        RoleMenusPayload::export(&config)?;
        UserResponse::export(&config)?;
        CreateUserRequest::export(&config)?;
        UpdateUserRequest::export(&config)?;
        OrganizationResponse::export(&config)?;
        CreateOrganizationRequest::export(&config)?;
        UpdateOrganizationRequest::export(&config)?;
        SiteStatsOverviewResponse::export(&config)?;
        DailySiteStatsResponse::export(&config)?;

        Ok(())
    }

    #[test]
    fn overview_uses_counter_abbreviations() {
        let body = serde_json::to_value(SiteStatsOverviewResponse {
            today_page_views: 3,
            today_unique_visitors: 2,
            total_page_views: 30,
            total_unique_visitors: 20,
        })
        .unwrap_or_else(|_| panic!("test"));

        assert_eq!(body["todayPV"], 3);
        assert_eq!(body["todayUV"], 2);
        assert_eq!(body["totalPV"], 30);
        assert_eq!(body["totalUV"], 20);
    }
}
