use std::collections::HashMap;
use std::sync::Arc;

use cucumber::World;
use uuid::Uuid;

use user_lib::entities::{Role, User};
use user_lib::errors_service::UserServiceError;
use user_lib::role_service::RoleService;
use user_lib::user_service::UserService;

use crate::support::memory::{InMemoryRoleRepository, InMemoryUserRepository};

#[derive(Debug, Default, World)]
pub struct TestWorld {
    // Storage
    pub user_repo: Arc<InMemoryUserRepository>,
    pub role_repo: Arc<InMemoryRoleRepository>,

    // State
    pub current_user: Option<User>,
    pub current_role: Option<Role>,
    pub roles_by_name: HashMap<String, Role>,
    pub missing_id: Option<Uuid>,

    // Results
    pub users: Vec<User>,
    pub roles: Vec<Role>,
    pub error: Option<UserServiceError>,
}

impl TestWorld {
    pub fn user_service(&self) -> UserService<InMemoryUserRepository, InMemoryRoleRepository> {
        UserService::with_repos(self.user_repo.clone(), self.role_repo.clone())
    }

    pub fn role_service(&self) -> RoleService<InMemoryRoleRepository> {
        RoleService::with_repo(self.role_repo.clone())
    }

    pub fn current_user_id(&self) -> Uuid {
        self.current_user.as_ref().expect("User should exist").id
    }

    pub fn role_id(&self, role_name: &str) -> Uuid {
        self.roles_by_name
            .get(role_name)
            .unwrap_or_else(|| panic!("Role {role_name} should exist"))
            .id
    }

    /// Keeps the user on success, the error otherwise.
    pub fn record_user(&mut self, result: Result<User, UserServiceError>) {
        match result {
            Ok(user) => {
                self.current_user = Some(user);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }
}
