use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::RequestContext;
use crate::modules::experience::application::domain::entities::{ExperienceInput, WorkExperience};
use crate::modules::experience::application::ports::incoming::use_cases::{
    ManageExperienceError, ManageExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::modules::experience::application::service::experience_validation::validate_experience;

impl From<ExperienceRepositoryError> for ManageExperienceError {
    fn from(err: ExperienceRepositoryError) -> Self {
        match err {
            ExperienceRepositoryError::NotFound => ManageExperienceError::NotFound,
            ExperienceRepositoryError::DatabaseError(msg) => {
                ManageExperienceError::RepositoryError(msg)
            }
        }
    }
}

pub struct ManageExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> ManageExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ManageExperienceUseCase for ManageExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn create(
        &self,
        ctx: &RequestContext,
        input: ExperienceInput,
    ) -> Result<WorkExperience, ManageExperienceError> {
        ctx.require_admin()?;
        let fields = validate_experience(input).map_err(ManageExperienceError::Validation)?;

        let created = self.repository.create_experience(fields).await?;
        info!(experience_id = %created.id, company = %created.company, "Experience created");
        Ok(created)
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: ExperienceInput,
    ) -> Result<WorkExperience, ManageExperienceError> {
        ctx.require_admin()?;
        let fields = validate_experience(input).map_err(ManageExperienceError::Validation)?;

        Ok(self.repository.update_experience(id, fields).await?)
    }

    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), ManageExperienceError> {
        let admin = ctx.require_admin()?;
        self.repository.delete_experience(id).await?;

        info!(experience_id = %id, by = %admin.user_id, "Experience deleted");
        Ok(())
    }
}
