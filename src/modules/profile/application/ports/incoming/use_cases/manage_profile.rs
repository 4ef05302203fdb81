use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessError, RequestContext};
use crate::modules::profile::application::domain::entities::{Profile, ProfileInput};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ManageProfileError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("invalid profile: {0}")]
    Validation(ValidationErrors),

    #[error("profile not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Operates on the profile of the calling administrator.
#[async_trait]
pub trait ManageProfileUseCase: Send + Sync {
    async fn get_own(&self, ctx: &RequestContext) -> Result<Profile, ManageProfileError>;

    async fn upsert_own(
        &self,
        ctx: &RequestContext,
        input: ProfileInput,
    ) -> Result<Profile, ManageProfileError>;
}
