use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Role, User};
use crate::repository::errors::UserRepositoryError;

/// Persistence port for the user aggregate.
///
/// `save` inserts or replaces the user together with its role links and
/// returns the stored state.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn save(&self, user: &User) -> Result<User, UserRepositoryError>;
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError>;
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError>;
    async fn delete_by_id(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
    async fn exists_by_id(&self, user_id: Uuid) -> Result<bool, UserRepositoryError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, UserRepositoryError>;
}

/// Persistence port for roles.
#[async_trait]
pub trait RoleRepositoryTrait: Send + Sync {
    async fn save(&self, role: &Role) -> Result<Role, UserRepositoryError>;
    async fn find_by_id(&self, role_id: Uuid) -> Result<Option<Role>, UserRepositoryError>;
    async fn find_all(&self) -> Result<Vec<Role>, UserRepositoryError>;
    async fn exists_by_role_name(&self, role_name: &str) -> Result<bool, UserRepositoryError>;
}
