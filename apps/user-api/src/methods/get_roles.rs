use axum::{extract::State, Json};
use user_lib::repository::traits::{RoleRepositoryTrait, UserRepositoryTrait};

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::RoleResponse;
use crate::methods::routes::ROLES_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = ROLES_PATH,
    tag = "roles",
    responses(
        (status = 200, description = "List of roles", body = Vec<RoleResponse>),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_roles<U, R>(
    State(state): State<AppState<U, R>>,
) -> Result<Json<Vec<RoleResponse>>, ApiError>
where
    U: UserRepositoryTrait + 'static,
    R: RoleRepositoryTrait + 'static,
{
    state
        .role_service
        .get_all_roles()
        .await
        .map(|roles| Json(roles.into_iter().map(RoleResponse::from).collect()))
        .map_err(|e| handle_service_error(e, &state.env, "get_roles"))
}
