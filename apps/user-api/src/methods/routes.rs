pub const USERS_PATH: &str = "/users";
pub const USERS_BY_ID_PATH: &str = "/users/{id}";
pub const USER_ASSIGN_ROLE_PATH: &str = "/users/{user_id}/assign-role/{role_id}";
pub const USER_REMOVE_ROLE_PATH: &str = "/users/{user_id}/remove-role/{role_id}";
pub const ROLES_PATH: &str = "/roles";
pub const ROLES_BY_ID_PATH: &str = "/roles/{id}";

// Service routes
pub const SERVICE_HEALTH_PATH: &str = "/health";
pub const SERVICE_DOCS_PATH: &str = "/docs";
pub const OPENAPI_JSON_PATH: &str = "/api-doc/openapi.json";
