use axum::extract::{Path, State};
use user_lib::repository::traits::{RoleRepositoryTrait, UserRepositoryTrait};

use crate::error::{handle_service_error, ApiError};
use crate::methods::assign_role::parse_user_role_ids;
use crate::methods::routes::USER_REMOVE_ROLE_PATH;
use crate::state::AppState;

pub const ROLE_REMOVED: &str = "Role removed successfully";

#[utoipa::path(
    post,
    path = USER_REMOVE_ROLE_PATH,
    tag = "users",
    params(
        ("user_id" = String, Path, description = "User ID (UUID)"),
        ("role_id" = String, Path, description = "Role ID (UUID)")
    ),
    responses(
        (status = 200, description = "Role removed, removing a role the user lacks is a no-op", body = String),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "User or role not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn remove_role<U, R>(
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
        .remove_role_from_user(user_id, role_id)
        .await
        .map(|_| ROLE_REMOVED)
        .map_err(|e| handle_service_error(e, &state.env, "remove_role"))
}
