use inkpost_application::{CreateUserInput, UpdateUserInput, UserProfile, UserRecord};
use inkpost_core::AppError;
use inkpost_domain::AccountStatus;

use super::{CreateUserRequest, UpdateUserRequest, UserResponse};

impl From<UserRecord> for UserResponse {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id.to_string(),
            user_id: value.user_id,
            email: value.email,
            name: value.name,
            role_id: value.role_id,
            role_name: value.role_name,
            org_id: value.org_id,
            organization: value.organization,
            avatar: value.avatar,
            bio: value.bio,
            website: value.website,
            job_title: value.job_title,
            phone: value.phone,
            status: value.status.code(),
            last_login_at: value.last_login_at.map(|at| at.to_rfc3339()),
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

impl TryFrom<CreateUserRequest> for CreateUserInput {
    type Error = AppError;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: value.user_id,
            email: value.email,
            password: value.password,
            role_id: value.role_id,
            org_id: value.org_id,
            profile: UserProfile {
                name: value.name,
                avatar: value.avatar,
                bio: value.bio,
                website: value.website,
                job_title: value.job_title,
                phone: value.phone,
            },
            status: value.status.map(AccountStatus::from_code).transpose()?,
        })
    }
}

impl TryFrom<UpdateUserRequest> for UpdateUserInput {
    type Error = AppError;

    fn try_from(value: UpdateUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            email: value.email,
            password: value.password,
            role_id: value.role_id,
            org_id: value.org_id,
            profile: UserProfile {
                name: value.name,
                avatar: value.avatar,
                bio: value.bio,
                website: value.website,
                job_title: value.job_title,
                phone: value.phone,
            },
            status: value.status.map(AccountStatus::from_code).transpose()?,
        })
    }
}
