use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::RequestContext;
use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectChanges, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::application::service::project_validation::{
    validate_project, SLUG_TAKEN,
};
use crate::shared::validation::ValidationErrors;

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
        input: ProjectInput,
    ) -> Result<Project, UpdateProjectError> {
        ctx.require_admin()?;

        let validated = validate_project(input).map_err(UpdateProjectError::Validation)?;

        // Title edits never regenerate an existing slug.
        let changes = ProjectChanges {
            slug: validated.slug,
            fields: validated.fields,
        };

        self.project_repository
            .update_project(project_id, changes)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                ProjectRepositoryError::SlugAlreadyExists => {
                    UpdateProjectError::Validation(ValidationErrors::single("slug", SLUG_TAKEN))
                }
                ProjectRepositoryError::DatabaseError(msg) => {
                    UpdateProjectError::RepositoryError(msg)
                }
            })
    }
}
