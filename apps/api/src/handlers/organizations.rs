use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use inkpost_application::{CreateOrganizationInput, UpdateOrganizationInput};

use crate::dto::{CreateOrganizationRequest, OrganizationResponse, UpdateOrganizationRequest};
use crate::error::ApiResult;
use crate::state::AppState;

use super::parse_uuid;

pub async fn list_organizations_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<OrganizationResponse>>> {
    let organizations = state
        .organization_service
        .list_organizations()
        .await?
        .into_iter()
        .map(OrganizationResponse::from)
        .collect();

    Ok(Json(organizations))
}

pub async fn get_organization_handler(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> ApiResult<Json<OrganizationResponse>> {
    let organization = state
        .organization_service
        .get_organization(parse_uuid(&organization_id, "organization")?)
        .await?;

    Ok(Json(OrganizationResponse::from(organization)))
}

pub async fn create_organization_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrganizationRequest>,
) -> ApiResult<(StatusCode, Json<OrganizationResponse>)> {
    let organization = state
        .organization_service
        .create_organization(CreateOrganizationInput::from(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(OrganizationResponse::from(organization)),
    ))
}

pub async fn update_organization_handler(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
    Json(payload): Json<UpdateOrganizationRequest>,
) -> ApiResult<Json<OrganizationResponse>> {
    let organization = state
        .organization_service
        .update_organization(
            parse_uuid(&organization_id, "organization")?,
            UpdateOrganizationInput::from(payload),
        )
        .await?;

    Ok(Json(OrganizationResponse::from(organization)))
}

pub async fn delete_organization_handler(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .organization_service
        .delete_organization(parse_uuid(&organization_id, "organization")?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
