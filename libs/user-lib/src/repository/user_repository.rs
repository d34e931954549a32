use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{query, query_as, query_scalar, MySqlPool};
use uuid::Uuid;

use crate::entities::{Role, User};
use crate::repository::errors::UserRepositoryError;
use crate::repository::models::{user_from_rows, RoleRow, UserRoleMapping, UserRow};
use crate::repository::traits::UserRepositoryTrait;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pub pool: MySqlPool,
}

impl UserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn roles_for_user(&self, user_id: &str) -> Result<Vec<Role>, UserRepositoryError> {
        let rows = query_as::<_, RoleRow>(
            r#"
            SELECT r.id, r.role_name
            FROM roles r
            INNER JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = ?
            "#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(UserRepositoryError::from)?;

        rows.into_iter().map(Role::try_from).collect()
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn save(&self, user: &User) -> Result<User, UserRepositoryError> {
        let user_id = user.id.to_string();
        let mut tx = self.pool.begin().await.map_err(UserRepositoryError::from)?;

        let existing: i64 = query_scalar(
            r#"
            SELECT COUNT(*) FROM users WHERE id = ?
            "#
        )
        .bind(&user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(UserRepositoryError::from)?;

        if existing > 0 {
            query(
                r#"
                UPDATE users
                SET name = ?, email = ?
                WHERE id = ?
                "#
            )
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user_id)
            .execute(&mut *tx)
            .await
            .map_err(UserRepositoryError::from)?;
        } else {
            query(
                r#"
                INSERT INTO users (id, name, email)
                VALUES (?, ?, ?)
                "#
            )
            .bind(&user_id)
            .bind(&user.name)
            .bind(&user.email)
            .execute(&mut *tx)
            .await
            .map_err(UserRepositoryError::from)?;
        }

        // The role set is stored as a whole: drop the old links, write the new ones.
        query(
            r#"
            DELETE FROM user_roles WHERE user_id = ?
            "#
        )
        .bind(&user_id)
        .execute(&mut *tx)
        .await
        .map_err(UserRepositoryError::from)?;

        for role in &user.roles {
            query(
                r#"
                INSERT INTO user_roles (user_id, role_id)
                VALUES (?, ?)
                "#
            )
            .bind(&user_id)
            .bind(role.id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(UserRepositoryError::from)?;
        }

        tx.commit().await.map_err(UserRepositoryError::from)?;

        self.find_by_id(user.id)
            .await?
            .ok_or(UserRepositoryError::NotFound)
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        let row = query_as::<_, UserRow>(
            r#"
            SELECT id, name, email FROM users WHERE id = ?
            "#
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(UserRepositoryError::from)?;

        match row {
            Some(row) => {
                let roles = self.roles_for_user(&row.id).await?;
                Ok(Some(user_from_rows(row, roles)?))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let rows = query_as::<_, UserRow>(
            r#"
            SELECT id, name, email FROM users
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(UserRepositoryError::from)?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        let mappings = query_as::<_, UserRoleMapping>(
            r#"
            SELECT ur.user_id, r.id AS role_id, r.role_name
            FROM user_roles ur
            INNER JOIN roles r ON r.id = ur.role_id
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(UserRepositoryError::from)?;

        let mut roles_by_user: HashMap<String, Vec<Role>> = HashMap::new();
        for mapping in mappings {
            let user_id = mapping.user_id.clone();
            roles_by_user
                .entry(user_id)
                .or_default()
                .push(Role::try_from(mapping)?);
        }

        rows.into_iter()
            .map(|row| {
                let roles = roles_by_user.remove(&row.id).unwrap_or_default();
                user_from_rows(row, roles)
            })
            .collect()
    }

    async fn delete_by_id(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        query(
            r#"
            DELETE FROM users WHERE id = ?
            "#
        )
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(UserRepositoryError::from)?;

        Ok(())
    }

    async fn exists_by_id(&self, user_id: Uuid) -> Result<bool, UserRepositoryError> {
        let count: i64 = query_scalar(
            r#"
            SELECT COUNT(*) FROM users WHERE id = ?
            "#
        )
        .bind(user_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(UserRepositoryError::from)?;

        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserRepositoryError> {
        let count: i64 = query_scalar(
            r#"
            SELECT COUNT(*) FROM users WHERE email = ?
            "#
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(UserRepositoryError::from)?;

        Ok(count > 0)
    }
}
