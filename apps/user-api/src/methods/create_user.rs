use axum::{extract::State, http::StatusCode, Json};
use user_lib::repository::traits::{RoleRepositoryTrait, UserRepositoryTrait};
use uuid::Uuid;

use crate::error::{handle_service_error, ApiError};
use crate::extractors::ValidatedJson;
use crate::methods::entities::CreateUserRequest;
use crate::methods::routes::USERS_PATH;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = USERS_PATH,
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created, returns the generated id", body = Uuid),
        (status = 400, description = "Validation error or email already exists"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn create_user<U, R>(
    State(state): State<AppState<U, R>>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<Uuid>), ApiError>
where
    U: UserRepositoryTrait + 'static,
    R: RoleRepositoryTrait + 'static,
{
    let name = payload.name.unwrap_or_default();
    let email = payload.email.unwrap_or_default();

    state
        .user_service
        .create_user(&name, &email)
        .await
        .map(|user| (StatusCode::CREATED, Json(user.id)))
        .map_err(|e| handle_service_error(e, &state.env, "create_user"))
}
