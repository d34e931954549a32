use sqlx::FromRow;
use uuid::Uuid;

use crate::entities::{Role, User};
use crate::repository::errors::UserRepositoryError;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct RoleRow {
    pub id: String,
    pub role_name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserRoleMapping {
    pub user_id: String,
    pub role_id: String,
    pub role_name: String,
}

pub(crate) fn parse_uuid(s: &str) -> Result<Uuid, UserRepositoryError> {
    Uuid::parse_str(s).map_err(|_| UserRepositoryError::InvalidUuid(s.to_string()))
}

impl TryFrom<RoleRow> for Role {
    type Error = UserRepositoryError;

    fn try_from(row: RoleRow) -> Result<Self, Self::Error> {
        Ok(Role::with_id(parse_uuid(&row.id)?, row.role_name))
    }
}

impl TryFrom<UserRoleMapping> for Role {
    type Error = UserRepositoryError;

    fn try_from(mapping: UserRoleMapping) -> Result<Self, Self::Error> {
        Ok(Role::with_id(parse_uuid(&mapping.role_id)?, mapping.role_name))
    }
}

/// Rebuilds the aggregate from its row and the rows of its linked roles.
pub(crate) fn user_from_rows(
    row: UserRow,
    roles: impl IntoIterator<Item = Role>,
) -> Result<User, UserRepositoryError> {
    let mut user = User::with_id(parse_uuid(&row.id)?, row.name, row.email);
    user.roles.extend(roles);
    Ok(user)
}
