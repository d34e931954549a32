use axum::{
    routing::{get, post},
    Router,
};
use user_lib::repository::traits::{RoleRepositoryTrait, UserRepositoryTrait};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::methods::assign_role::assign_role;
use crate::methods::create_role::create_role;
use crate::methods::create_user::create_user;
use crate::methods::get_role_by_id::get_role_by_id;
use crate::methods::get_roles::get_roles;
use crate::methods::get_user_by_id::get_user_by_id;
use crate::methods::get_users::get_users;
use crate::methods::health_check::health_check;
use crate::methods::remove_role::remove_role;
use crate::methods::routes::{
    OPENAPI_JSON_PATH, ROLES_BY_ID_PATH, ROLES_PATH, SERVICE_DOCS_PATH, SERVICE_HEALTH_PATH,
    USERS_BY_ID_PATH, USERS_PATH, USER_ASSIGN_ROLE_PATH, USER_REMOVE_ROLE_PATH,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Builds the application router without the network middleware stack,
/// which `main` layers on top.
pub fn routes<U, R>(state: AppState<U, R>) -> Router
where
    U: UserRepositoryTrait + 'static,
    R: RoleRepositoryTrait + 'static,
{
    let api_routes = Router::new()
        // User endpoints
        .route(USERS_PATH, get(get_users::<U, R>).post(create_user::<U, R>))
        .route(USERS_BY_ID_PATH, get(get_user_by_id::<U, R>))
        .route(USER_ASSIGN_ROLE_PATH, post(assign_role::<U, R>))
        .route(USER_REMOVE_ROLE_PATH, post(remove_role::<U, R>))
        // Role endpoints
        .route(ROLES_PATH, get(get_roles::<U, R>).post(create_role::<U, R>))
        .route(ROLES_BY_ID_PATH, get(get_role_by_id::<U, R>));

    let root_routes = Router::new()
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .merge(SwaggerUi::new(SERVICE_DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()));

    api_routes.merge(root_routes).with_state(state)
}
