use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::RequestContext;
use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    NewProject, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::application::service::project_validation::{
    validate_project, SLUG_TAKEN,
};
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        ctx: &RequestContext,
        input: ProjectInput,
    ) -> Result<Project, CreateProjectError> {
        ctx.require_admin()?;

        let validated = validate_project(input).map_err(CreateProjectError::Validation)?;
        let slug = validated
            .slug_or_derived()
            .map_err(CreateProjectError::Validation)?;
        let data = NewProject {
            slug,
            fields: validated.fields,
        };

        let project = self
            .project_repository
            .create_project(data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::SlugAlreadyExists => {
                    CreateProjectError::Validation(ValidationErrors::single("slug", SLUG_TAKEN))
                }
                ProjectRepositoryError::DatabaseError(msg) => {
                    CreateProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::NotFound => CreateProjectError::RepositoryError(
                    "unexpected not found while creating project".to_string(),
                ),
            })?;

        info!(project_id = %project.id, slug = %project.slug, "Project created");
        Ok(project)
    }
}
