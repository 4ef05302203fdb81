use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectError {
    #[error("project not found")]
    NotFound,

    #[error("query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetProjectUseCase: Send + Sync {
    async fn by_id(&self, project_id: Uuid) -> Result<Project, GetProjectError>;

    async fn by_slug(&self, slug: &str) -> Result<Project, GetProjectError>;
}
