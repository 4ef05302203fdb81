use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccessError, RequestContext};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("project not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, ctx: &RequestContext, project_id: Uuid)
        -> Result<(), DeleteProjectError>;
}
