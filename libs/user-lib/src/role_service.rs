use std::sync::Arc;

use uuid::Uuid;

use crate::entities::Role;
use crate::errors_service::{UserServiceError, ROLE_NAME_CANNOT_BE_EMPTY};
use crate::repository::errors::UserRepositoryError;
use crate::repository::traits::RoleRepositoryTrait;
use crate::repository::RoleRepository;

fn validate_role_name(name: &str) -> Result<(), UserServiceError> {
    if name.trim().is_empty() {
        return Err(UserServiceError::InvalidArgument(
            ROLE_NAME_CANNOT_BE_EMPTY.to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct RoleService<R = RoleRepository>
where
    R: RoleRepositoryTrait,
{
    pub role_repo: Arc<R>,
}

impl RoleService<RoleRepository> {
    pub fn new(role_repo: RoleRepository) -> Self {
        Self {
            role_repo: Arc::new(role_repo),
        }
    }
}

impl<R> RoleService<R>
where
    R: RoleRepositoryTrait,
{
    pub fn with_repo(role_repo: Arc<R>) -> Self {
        Self { role_repo }
    }

    /// Creates a role whose name is not taken yet.
    ///
    /// The name is checked for existence as given, without trimming.
    pub async fn create_role(&self, name: &str) -> Result<Role, UserServiceError> {
        validate_role_name(name)?;

        if self.role_repo.exists_by_role_name(name).await? {
            return Err(UserServiceError::role_already_exists(name));
        }

        let role = Role::new(name);
        let saved = self.role_repo.save(&role).await.map_err(|e| match e {
            UserRepositoryError::RoleNameAlreadyExists => UserServiceError::role_already_exists(name),
            other => other.into(),
        })?;

        tracing::info!(role_id = %saved.id, role_name = %saved.role_name, "role created");
        Ok(saved)
    }

    pub async fn get_role_by_id(&self, role_id: Uuid) -> Result<Role, UserServiceError> {
        self.role_repo
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| UserServiceError::role_not_found(role_id))
    }

    pub async fn get_all_roles(&self) -> Result<Vec<Role>, UserServiceError> {
        Ok(self.role_repo.find_all().await?)
    }
}
