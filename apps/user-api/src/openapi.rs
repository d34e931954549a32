use utoipa::OpenApi;

use crate::methods::entities::{CreateRoleRequest, CreateUserRequest, RoleResponse, UserResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::methods::create_user::create_user,
        crate::methods::get_user_by_id::get_user_by_id,
        crate::methods::get_users::get_users,
        crate::methods::assign_role::assign_role,
        crate::methods::remove_role::remove_role,
        crate::methods::create_role::create_role,
        crate::methods::get_role_by_id::get_role_by_id,
        crate::methods::get_roles::get_roles,
        crate::methods::health_check::health_check
    ),
    components(schemas(CreateUserRequest, UserResponse, CreateRoleRequest, RoleResponse)),
    tags(
        (name = "users", description = "User management and role assignment endpoints"),
        (name = "roles", description = "Role management endpoints")
    )
)]
pub struct ApiDoc;
