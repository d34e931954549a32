use serde::{Deserialize, Serialize};
use user_lib::entities::{Role, User};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Missing and `null` fields are accepted here so the service reports them
/// with its own validation message.
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    #[validate(length(max = 255, message = "name cannot exceed 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 255, message = "email cannot exceed 255 characters"))]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    #[validate(length(max = 255, message = "role name cannot exceed 255 characters"))]
    pub role_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub id: Uuid,
    pub role_name: String,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        RoleResponse {
            id: role.id,
            role_name: role.role_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub roles: Vec<RoleResponse>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            roles: user.roles.into_iter().map(RoleResponse::from).collect(),
        }
    }
}
