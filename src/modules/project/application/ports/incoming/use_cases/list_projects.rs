use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_query::{
    PageRequest, PageResult, ProjectListFilter,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProjectsError {
    #[error("query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn list(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Project>, ListProjectsError>;

    async fn featured(&self) -> Result<Vec<Project>, ListProjectsError>;

    async fn categories(&self) -> Result<Vec<String>, ListProjectsError>;
}
