use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessError, RequestContext};
use crate::modules::experience::application::domain::entities::WorkExperience;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListExperiencesError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListExperiencesUseCase: Send + Sync {
    /// Public timeline: visible rows only.
    async fn visible(&self) -> Result<Vec<WorkExperience>, ListExperiencesError>;

    /// Management view: every row, same ordering.
    async fn all(&self, ctx: &RequestContext) -> Result<Vec<WorkExperience>, ListExperiencesError>;
}
