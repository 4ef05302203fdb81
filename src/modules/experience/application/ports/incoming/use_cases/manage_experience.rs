use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccessError, RequestContext};
use crate::modules::experience::application::domain::entities::{ExperienceInput, WorkExperience};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ManageExperienceError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("invalid experience: {0}")]
    Validation(ValidationErrors),

    #[error("experience not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ManageExperienceUseCase: Send + Sync {
    async fn create(
        &self,
        ctx: &RequestContext,
        input: ExperienceInput,
    ) -> Result<WorkExperience, ManageExperienceError>;

    async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: ExperienceInput,
    ) -> Result<WorkExperience, ManageExperienceError>;

    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), ManageExperienceError>;
}
