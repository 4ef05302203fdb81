use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    ListProjectsError, ListProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    PageRequest, PageResult, ProjectListFilter, ProjectQuery, ProjectQueryError,
};

pub struct ListProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> ListProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn map_query_error(e: ProjectQueryError) -> ListProjectsError {
    ListProjectsError::QueryError(e.to_string())
}

#[async_trait]
impl<Q> ListProjectsUseCase for ListProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn list(
        &self,
        mut filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Project>, ListProjectsError> {
        filter.category = filter
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        self.query.list(filter, page).await.map_err(map_query_error)
    }

    async fn featured(&self) -> Result<Vec<Project>, ListProjectsError> {
        self.query.featured().await.map_err(map_query_error)
    }

    async fn categories(&self) -> Result<Vec<String>, ListProjectsError> {
        self.query.categories().await.map_err(map_query_error)
    }
}
