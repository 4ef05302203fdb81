use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessError, RequestContext};
use crate::modules::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSkillsError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListSkillsUseCase: Send + Sync {
    async fn visible(&self) -> Result<Vec<Skill>, ListSkillsError>;

    async fn all(&self, ctx: &RequestContext) -> Result<Vec<Skill>, ListSkillsError>;
}
