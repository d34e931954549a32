use async_trait::async_trait;
use sqlx::{query, query_as, query_scalar, MySqlPool};
use uuid::Uuid;

use crate::entities::Role;
use crate::repository::errors::{map_sqlx_error, UserRepositoryError};
use crate::repository::models::RoleRow;
use crate::repository::traits::RoleRepositoryTrait;

#[derive(Debug, Clone)]
pub struct RoleRepository {
    pub pool: MySqlPool,
}

impl RoleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepositoryTrait for RoleRepository {
    async fn save(&self, role: &Role) -> Result<Role, UserRepositoryError> {
        let role_id = role.id.to_string();

        let existing: i64 = query_scalar(
            r#"SELECT COUNT(*) FROM roles WHERE id = ?"#
        )
        .bind(&role_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if existing > 0 {
            query(
                r#"
                UPDATE roles
                SET role_name = ?
                WHERE id = ?
                "#
            )
            .bind(&role.role_name)
            .bind(&role_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        } else {
            query(
                r#"
                INSERT INTO roles (id, role_name)
                VALUES (?, ?)
                "#
            )
            .bind(&role_id)
            .bind(&role.role_name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        }

        let row = query_as::<_, RoleRow>(
            r#"SELECT id, role_name FROM roles WHERE id = ? "#
        )
        .bind(&role_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Role::try_from(row)
    }

    async fn find_by_id(&self, role_id: Uuid) -> Result<Option<Role>, UserRepositoryError> {
        let row = query_as::<_, RoleRow>(
            r#"
            SELECT id, role_name FROM roles WHERE id = ?
            "#
        )
        .bind(role_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        row.map(Role::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Role>, UserRepositoryError> {
        let rows = query_as::<_, RoleRow>(
            r#"
            SELECT id, role_name FROM roles
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        rows.into_iter().map(Role::try_from).collect()
    }

    async fn exists_by_role_name(&self, role_name: &str) -> Result<bool, UserRepositoryError> {
        let count: i64 = query_scalar(
            r#"
            SELECT COUNT(*) FROM roles WHERE role_name = ?
            "#
        )
        .bind(role_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(count > 0)
    }
}
