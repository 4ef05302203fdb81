use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccessError, RequestContext};
use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("invalid project: {0}")]
    Validation(ValidationErrors),

    #[error("project not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Full replacement of the editable fields. A blank slug keeps the current one.
#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
        input: ProjectInput,
    ) -> Result<Project, UpdateProjectError>;
}
