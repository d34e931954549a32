pub mod assign_role;
pub mod create_role;
pub mod create_user;
pub mod entities;
pub mod get_role_by_id;
pub mod get_roles;
pub mod get_user_by_id;
pub mod get_users;
pub mod health_check;
pub mod remove_role;
pub mod routes;
