use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::validation::ValidationErrors;

/// Credentials supplied by the operator (environment variables).
#[derive(Debug, Clone)]
pub struct BootstrapSuperuserCommand {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created(UserId),
    PasswordReset(UserId),
}

impl BootstrapOutcome {
    pub fn user_id(&self) -> UserId {
        match self {
            BootstrapOutcome::Created(id) | BootstrapOutcome::PasswordReset(id) => *id,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BootstrapSuperuserError {
    #[error("invalid credentials: {0}")]
    Validation(ValidationErrors),

    #[error("stored password hash did not verify")]
    VerificationFailed,

    #[error("password hashing failed: {0}")]
    HashingFailed(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait BootstrapSuperuserUseCase: Send + Sync {
    async fn execute(
        &self,
        command: BootstrapSuperuserCommand,
    ) -> Result<BootstrapOutcome, BootstrapSuperuserError>;
}
