use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct NewSuperuser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_superuser(&self, user: NewSuperuser) -> Result<UserId, UserRepositoryError>;

    /// Replaces the password and (re)grants superuser + active status.
    async fn promote_with_password(
        &self,
        user_id: UserId,
        email: &str,
        password_hash: String,
    ) -> Result<(), UserRepositoryError>;
}
