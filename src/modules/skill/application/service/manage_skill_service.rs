use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::RequestContext;
use crate::modules::skill::application::domain::entities::{Skill, SkillInput};
use crate::modules::skill::application::ports::incoming::use_cases::{
    ManageSkillError, ManageSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};
use crate::modules::skill::application::service::skill_validation::validate_skill;

impl From<SkillRepositoryError> for ManageSkillError {
    fn from(err: SkillRepositoryError) -> Self {
        match err {
            SkillRepositoryError::NotFound => ManageSkillError::NotFound,
            SkillRepositoryError::DatabaseError(msg) => ManageSkillError::RepositoryError(msg),
        }
    }
}

pub struct ManageSkillService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> ManageSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ManageSkillUseCase for ManageSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn create(
        &self,
        ctx: &RequestContext,
        input: SkillInput,
    ) -> Result<Skill, ManageSkillError> {
        ctx.require_admin()?;
        let fields = validate_skill(input).map_err(ManageSkillError::Validation)?;

        let created = self.repository.create_skill(fields).await?;
        info!(skill_id = %created.id, name = %created.name, "Skill created");
        Ok(created)
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: SkillInput,
    ) -> Result<Skill, ManageSkillError> {
        ctx.require_admin()?;
        let fields = validate_skill(input).map_err(ManageSkillError::Validation)?;
        Ok(self.repository.update_skill(id, fields).await?)
    }

    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), ManageSkillError> {
        let admin = ctx.require_admin()?;
        self.repository.delete_skill(id).await?;

        info!(skill_id = %id, by = %admin.user_id, "Skill deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{AccessError, RequestContext};
    use crate::modules::skill::application::domain::entities::SkillCategory;
    use crate::tests::support::auth_helper::admin_context;
    use crate::tests::support::skill_test_fixtures::{skill_input, InMemorySkills};

    #[tokio::test]
    async fn test_create_then_update_category() {
        let repo = InMemorySkills::default();
        let service = ManageSkillService::new(repo.clone());
        let ctx = admin_context();

        let created = service.create(&ctx, skill_input("Docker")).await.unwrap();
        assert_eq!(created.category, SkillCategory::Programming);

        let mut input = skill_input("Docker");
        input.category = Some("tool".to_string());
        input.proficiency_level = 80;
        let updated = service.update(&ctx, created.id, input).await.unwrap();

        assert_eq!(updated.category, SkillCategory::Tool);
        assert_eq!(updated.proficiency_level, 80);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_anonymous_create_never_reaches_repository() {
        let repo = InMemorySkills::default();
        let service = ManageSkillService::new(repo.clone());

        let result = service
            .create(&RequestContext::anonymous(), skill_input("Rust"))
            .await;

        assert!(matches!(
            result,
            Err(ManageSkillError::Access(AccessError::Unauthenticated))
        ));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let service = ManageSkillService::new(InMemorySkills::default());
        assert!(matches!(
            service.delete(&admin_context(), Uuid::new_v4()).await,
            Err(ManageSkillError::NotFound)
        ));
    }
}
