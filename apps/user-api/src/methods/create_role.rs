use axum::{extract::State, http::StatusCode, Json};
use user_lib::repository::traits::{RoleRepositoryTrait, UserRepositoryTrait};

use crate::error::{handle_service_error, ApiError};
use crate::extractors::ValidatedJson;
use crate::methods::entities::{CreateRoleRequest, RoleResponse};
use crate::methods::routes::ROLES_PATH;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = ROLES_PATH,
    tag = "roles",
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created successfully", body = RoleResponse),
        (status = 400, description = "Validation error or role name already exists"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn create_role<U, R>(
    State(state): State<AppState<U, R>>,
    ValidatedJson(payload): ValidatedJson<CreateRoleRequest>,
) -> Result<(StatusCode, Json<RoleResponse>), ApiError>
where
    U: UserRepositoryTrait + 'static,
    R: RoleRepositoryTrait + 'static,
{
    let role_name = payload.role_name.unwrap_or_default();

    state
        .role_service
        .create_role(&role_name)
        .await
        .map(|role| (StatusCode::CREATED, Json(RoleResponse::from(role))))
        .map_err(|e| handle_service_error(e, &state.env, "create_role"))
}
