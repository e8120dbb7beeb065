//! User repository implementation

use sqlx::PgPool;

use crate::models::user::{CreateUserRequest, User};
use crate::utils::errors::EventHubError;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user (normally done by the external auth service)
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, EventHubError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(request.name)
        .bind(request.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Check whether a user id exists
    pub async fn exists(&self, id: i64) -> Result<bool, EventHubError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}
