use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectError, GetProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};

pub struct GetProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn map_query_error(e: ProjectQueryError) -> GetProjectError {
    match e {
        ProjectQueryError::NotFound => GetProjectError::NotFound,
        ProjectQueryError::DatabaseError(msg) => GetProjectError::QueryError(msg),
    }
}

#[async_trait]
impl<Q> GetProjectUseCase for GetProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn by_id(&self, project_id: Uuid) -> Result<Project, GetProjectError> {
        self.query.get_by_id(project_id).await.map_err(map_query_error)
    }

    async fn by_slug(&self, slug: &str) -> Result<Project, GetProjectError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(GetProjectError::NotFound);
        }
        self.query.get_by_slug(slug).await.map_err(map_query_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::project_test_fixtures::InMemoryProjects;

    #[tokio::test]
    async fn test_by_slug_is_case_insensitive() {
        let repo = InMemoryProjects::default();
        let existing = repo.insert("Rust CLI", "rust-cli");
        let service = GetProjectService::new(repo);

        let found = service.by_slug("Rust-CLI").await.unwrap();
        assert_eq!(found.id, existing.id);
    }

    #[tokio::test]
    async fn test_unknown_slug_is_not_found() {
        let service = GetProjectService::new(InMemoryProjects::default());

        assert!(matches!(
            service.by_slug("missing").await,
            Err(GetProjectError::NotFound)
        ));
        assert!(matches!(
            service.by_slug("  ").await,
            Err(GetProjectError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_by_id() {
        let repo = InMemoryProjects::default();
        let existing = repo.insert("One", "one");
        let service = GetProjectService::new(repo);

        assert_eq!(service.by_id(existing.id).await.unwrap().slug, "one");
        assert!(matches!(
            service.by_id(Uuid::new_v4()).await,
            Err(GetProjectError::NotFound)
        ));
    }
}
