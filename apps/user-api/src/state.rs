use std::sync::Arc;
use user_lib::repository::traits::{RoleRepositoryTrait, UserRepositoryTrait};
use user_lib::repository::{RoleRepository, UserRepository};
use user_lib::role_service::RoleService;
use user_lib::user_service::UserService;

pub struct AppState<U = UserRepository, R = RoleRepository>
where
    U: UserRepositoryTrait + 'static,
    R: RoleRepositoryTrait + 'static,
{
    pub user_service: Arc<UserService<U, R>>,
    pub role_service: Arc<RoleService<R>>,
    pub env: String,
}

impl<U, R> AppState<U, R>
where
    U: UserRepositoryTrait + 'static,
    R: RoleRepositoryTrait + 'static,
{
    /// Both services share the same role repository.
    pub fn new(user_repo: Arc<U>, role_repo: Arc<R>, env: impl Into<String>) -> Self {
        Self {
            user_service: Arc::new(UserService::with_repos(user_repo, role_repo.clone())),
            role_service: Arc::new(RoleService::with_repo(role_repo)),
            env: env.into(),
        }
    }
}

impl<U, R> Clone for AppState<U, R>
where
    U: UserRepositoryTrait + 'static,
    R: RoleRepositoryTrait + 'static,
{
    fn clone(&self) -> Self {
        Self {
            user_service: self.user_service.clone(),
            role_service: self.role_service.clone(),
            env: self.env.clone(),
        }
    }
}
