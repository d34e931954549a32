//! In-memory repositories so scenarios can observe state across service calls.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use user_lib::entities::{Role, User};
use user_lib::repository::errors::UserRepositoryError;
use user_lib::repository::traits::{RoleRepositoryTrait, UserRepositoryTrait};

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.id != user.id && u.email == user.email) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        Ok(user.clone())
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn delete_by_id(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.users.lock().unwrap().retain(|u| u.id != user_id);
        Ok(())
    }

    async fn exists_by_id(&self, user_id: Uuid) -> Result<bool, UserRepositoryError> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.id == user_id))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserRepositoryError> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.email == email))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRoleRepository {
    roles: Mutex<Vec<Role>>,
}

#[async_trait]
impl RoleRepositoryTrait for InMemoryRoleRepository {
    async fn save(&self, role: &Role) -> Result<Role, UserRepositoryError> {
        let mut roles = self.roles.lock().unwrap();
        if roles.iter().any(|r| r.id != role.id && r.role_name == role.role_name) {
            return Err(UserRepositoryError::RoleNameAlreadyExists);
        }
        match roles.iter_mut().find(|r| r.id == role.id) {
            Some(existing) => *existing = role.clone(),
            None => roles.push(role.clone()),
        }
        Ok(role.clone())
    }

    async fn find_by_id(&self, role_id: Uuid) -> Result<Option<Role>, UserRepositoryError> {
        Ok(self.roles.lock().unwrap().iter().find(|r| r.id == role_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Role>, UserRepositoryError> {
        Ok(self.roles.lock().unwrap().clone())
    }

    async fn exists_by_role_name(&self, role_name: &str) -> Result<bool, UserRepositoryError> {
        Ok(self.roles.lock().unwrap().iter().any(|r| r.role_name == role_name))
    }
}
