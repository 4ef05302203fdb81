use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessError, RequestContext};
use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("invalid project: {0}")]
    Validation(ValidationErrors),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        ctx: &RequestContext,
        input: ProjectInput,
    ) -> Result<Project, CreateProjectError>;
}
