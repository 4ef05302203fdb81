use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::Profile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPublicProfileError {
    #[error("profile not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPublicProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Profile, GetPublicProfileError>;
}
