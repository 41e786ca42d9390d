//! Application services and ports.

#![forbid(unsafe_code)]

mod auth_service;
mod menu_ports;
mod menu_service;
mod organization_ports;
mod organization_service;
mod role_ports;
mod role_service;
mod session_ports;
mod site_stats_ports;
mod site_stats_service;
mod user_keys;
mod user_ports;
mod user_service;

#[cfg(test)]
mod test_support;

pub use auth_service::{AuthService, INVALID_CREDENTIALS_MESSAGE, LoginOutcome, RegisterInput};
pub use menu_ports::MenuRepository;
pub use menu_service::{CreateMenuInput, MenuPosition, MenuService};
pub use organization_ports::{OrganizationRecord, OrganizationRepository};
pub use organization_service::{
    CreateOrganizationInput, OrganizationService, UpdateOrganizationInput,
};
pub use role_ports::{RoleRecord, RoleRepository};
pub use role_service::{CreateRoleInput, RoleService, UpdateRoleInput};
pub use session_ports::{IssuedSessionToken, SessionTokenCodec};
pub use site_stats_ports::{DailySiteStats, SiteStatsRepository, SiteStatsTotals, VisitorRegistry};
pub use site_stats_service::{
    DEFAULT_RECENT_DAYS, MAX_RECENT_DAYS, SiteStatsOverview, SiteStatsService,
};
pub use user_ports::{NewUser, PasswordHasher, UserProfile, UserRecord, UserRepository};
pub use user_service::{CreateUserInput, UpdateUserInput, UserService};
