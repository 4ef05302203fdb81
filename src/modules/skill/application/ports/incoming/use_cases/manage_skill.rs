use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccessError, RequestContext};
use crate::modules::skill::application::domain::entities::{Skill, SkillInput};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ManageSkillError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("invalid skill: {0}")]
    Validation(ValidationErrors),

    #[error("skill not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ManageSkillUseCase: Send + Sync {
    async fn create(&self, ctx: &RequestContext, input: SkillInput)
        -> Result<Skill, ManageSkillError>;

    async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: SkillInput,
    ) -> Result<Skill, ManageSkillError>;

    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), ManageSkillError>;
}
