use std::sync::{Arc, OnceLock};

use regex::Regex;
use uuid::Uuid;

use crate::entities::{Role, User};
use crate::errors_service::{
    UserServiceError, EMAIL_ALREADY_EXISTS, INVALID_EMAIL_FORMAT, NAME_CANNOT_BE_EMPTY,
};
use crate::repository::traits::{RoleRepositoryTrait, UserRepositoryTrait};
use crate::repository::{RoleRepository, UserRepository};

/// Word, dot and hyphen characters, `@`, dot-separated labels, and a final
/// label of 2 to 4 characters.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$")
            .expect("email pattern is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

fn validate_name(name: &str) -> Result<(), UserServiceError> {
    if name.trim().is_empty() {
        return Err(UserServiceError::InvalidArgument(
            NAME_CANNOT_BE_EMPTY.to_string(),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), UserServiceError> {
    if email.trim().is_empty() || !is_valid_email(email) {
        return Err(UserServiceError::InvalidArgument(
            INVALID_EMAIL_FORMAT.to_string(),
        ));
    }
    Ok(())
}

/// Use cases over the user aggregate.
///
/// Role assignment is a plain load, mutate, save sequence. Nothing guards the
/// window between loading the user and saving it, so two concurrent changes
/// to the same user's roles resolve as last write wins.
#[derive(Debug, Clone)]
pub struct UserService<U = UserRepository, R = RoleRepository>
where
    U: UserRepositoryTrait,
    R: RoleRepositoryTrait,
{
    pub user_repo: Arc<U>,
    pub role_repo: Arc<R>,
}

impl UserService<UserRepository, RoleRepository> {
    pub fn new(user_repo: UserRepository, role_repo: RoleRepository) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
            role_repo: Arc::new(role_repo),
        }
    }
}

impl<U, R> UserService<U, R>
where
    U: UserRepositoryTrait,
    R: RoleRepositoryTrait,
{
    pub fn with_repos(user_repo: Arc<U>, role_repo: Arc<R>) -> Self {
        Self {
            user_repo,
            role_repo,
        }
    }

    pub async fn create_user(&self, name: &str, email: &str) -> Result<User, UserServiceError> {
        validate_name(name)?;
        validate_email(email)?;

        if self.user_repo.exists_by_email(email).await? {
            return Err(UserServiceError::InvalidArgument(
                EMAIL_ALREADY_EXISTS.to_string(),
            ));
        }

        let user = User::new(name, email);
        let saved = self.user_repo.save(&user).await?;

        tracing::info!(user_id = %saved.id, "user created");
        Ok(saved)
    }

    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<User, UserServiceError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UserServiceError::user_not_found(user_id))
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, UserServiceError> {
        Ok(self.user_repo.find_all().await?)
    }

    async fn get_role(&self, role_id: Uuid) -> Result<Role, UserServiceError> {
        self.role_repo
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| UserServiceError::role_not_found(role_id))
    }

    /// Adds the role to the user. Assigning a role the user already holds
    /// still saves and returns the unchanged user.
    pub async fn assign_role_to_user(
        &self,
        user_id: Uuid,
        role_id: Uuid,
    ) -> Result<User, UserServiceError> {
        let mut user = self.get_user_by_id(user_id).await?;
        let role = self.get_role(role_id).await?;

        if !user.add_role(role) {
            tracing::debug!(user_id = %user_id, role_id = %role_id, "user already has role");
        }

        let saved = self.user_repo.save(&user).await?;
        tracing::info!(user_id = %user_id, role_id = %role_id, "role assigned");
        Ok(saved)
    }

    /// Removes the role from the user; a role the user does not hold is a
    /// no-op, but the role itself has to exist.
    pub async fn remove_role_from_user(
        &self,
        user_id: Uuid,
        role_id: Uuid,
    ) -> Result<User, UserServiceError> {
        let mut user = self.get_user_by_id(user_id).await?;
        let role = self.get_role(role_id).await?;

        if !user.remove_role(role.id) {
            tracing::debug!(user_id = %user_id, role_id = %role_id, "user did not have role");
        }

        let saved = self.user_repo.save(&user).await?;
        tracing::info!(user_id = %user_id, role_id = %role_id, "role removed");
        Ok(saved)
    }
}
