use uuid::Uuid;

use crate::repository::errors::UserRepositoryError;

pub const NAME_CANNOT_BE_EMPTY: &str = "Name cannot be empty";
pub const INVALID_EMAIL_FORMAT: &str = "Invalid email format";
pub const EMAIL_ALREADY_EXISTS: &str = "Email already exists";
pub const ROLE_NAME_CANNOT_BE_EMPTY: &str = "Role name cannot be empty";

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    /// Malformed or conflicting input; the caller has to change it.
    #[error("{0}")]
    InvalidArgument(String),

    /// A referenced user or role does not exist.
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl UserServiceError {
    pub fn user_not_found(id: Uuid) -> Self {
        UserServiceError::NotFound(format!("User not found with id: {id}"))
    }

    pub fn role_not_found(id: Uuid) -> Self {
        UserServiceError::NotFound(format!("Role not found with id: {id}"))
    }

    pub fn role_already_exists(name: &str) -> Self {
        UserServiceError::InvalidArgument(format!("Role already exists with name: {name}"))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, UserServiceError::InvalidArgument(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, UserServiceError::NotFound(_))
    }
}

impl From<UserRepositoryError> for UserServiceError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::EmailAlreadyExists => {
                UserServiceError::InvalidArgument(EMAIL_ALREADY_EXISTS.to_string())
            }
            // RoleService rewrites a duplicate role name with the name it tried;
            // anywhere else it is unexpected.
            other => UserServiceError::Internal(other.into()),
        }
    }
}
