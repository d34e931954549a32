use axum::extract::{Path, State};
use user_lib::repository::traits::{RoleRepositoryTrait, UserRepositoryTrait};
use uuid::Uuid;

use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::USER_ASSIGN_ROLE_PATH;
use crate::state::AppState;

pub const ROLE_ASSIGNED: &str = "Role assigned successfully";

/// Parses the `{user_id}` and `{role_id}` path segments.
pub fn parse_user_role_ids(user_id: &str, role_id: &str) -> Result<(Uuid, Uuid), ApiError> {
    let user_id = Uuid::parse_str(user_id).map_err(|_| ApiError::invalid_user_uuid())?;
    let role_id = Uuid::parse_str(role_id).map_err(|_| ApiError::invalid_role_uuid())?;
    Ok((user_id, role_id))
}

#[utoipa::path(
    post,
    path = USER_ASSIGN_ROLE_PATH,
    tag = "users",
    params(
        ("user_id" = String, Path, description = "User ID (UUID)"),
        ("role_id" = String, Path, description = "Role ID (UUID)")
    ),
    responses(
        (status = 200, description = "Role assigned, assigning a held role is a no-op", body = String),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "User or role not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn assign_role<U, R>(
    Path((user_id, role_id)): Path<(String, String)>,
    State(state): State<AppState<U, R>>,
) -> Result<&'static str, ApiError>
where
    U: UserRepositoryTrait + 'static,
    R: RoleRepositoryTrait + 'static,
{
    let (user_id, role_id) = parse_user_role_ids(&user_id, &role_id)?;

    state
        .user_service
        .assign_role_to_user(user_id, role_id)
        .await
        .map(|_| ROLE_ASSIGNED)
        .map_err(|e| handle_service_error(e, &state.env, "assign_role"))
}
