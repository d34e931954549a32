use axum::{
    extract::{Path, State},
    Json,
};
use user_lib::repository::traits::{RoleRepositoryTrait, UserRepositoryTrait};
use uuid::Uuid;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::RoleResponse;
use crate::methods::routes::ROLES_BY_ID_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = ROLES_BY_ID_PATH,
    tag = "roles",
    params(
        ("id" = String, Path, description = "Role ID (UUID)")
    ),
    responses(
        (status = 200, description = "Role found", body = RoleResponse),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Role not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_role_by_id<U, R>(
    Path(id): Path<String>,
    State(state): State<AppState<U, R>>,
) -> Result<Json<RoleResponse>, ApiError>
where
    U: UserRepositoryTrait + 'static,
    R: RoleRepositoryTrait + 'static,
{
    let parsed_id = Uuid::parse_str(&id).map_err(|_| ApiError::invalid_uuid())?;

    state
        .role_service
        .get_role_by_id(parsed_id)
        .await
        .map(|role| Json(RoleResponse::from(role)))
        .map_err(|e| handle_service_error(e, &state.env, "get_role_by_id"))
}
