use async_trait::async_trait;

use crate::auth::application::domain::entities::RequestContext;
use crate::modules::experience::application::domain::entities::WorkExperience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    ListExperiencesError, ListExperiencesUseCase,
};
use crate::modules::experience::application::ports::outgoing::{ExperienceQuery, Visibility};

pub struct ListExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
}

impl<Q> ListExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    async fn fetch(&self, visibility: Visibility) -> Result<Vec<WorkExperience>, ListExperiencesError> {
        self.query
            .list(visibility)
            .await
            .map_err(|e| ListExperiencesError::QueryError(e.to_string()))
    }
}

#[async_trait]
impl<Q> ListExperiencesUseCase for ListExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn visible(&self) -> Result<Vec<WorkExperience>, ListExperiencesError> {
        self.fetch(Visibility::VisibleOnly).await
    }

    async fn all(&self, ctx: &RequestContext) -> Result<Vec<WorkExperience>, ListExperiencesError> {
        ctx.require_admin()?;
        self.fetch(Visibility::All).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::AccessError;
    use crate::tests::support::auth_helper::{admin_context, user_context};
    use crate::tests::support::experience_test_fixtures::{date, InMemoryExperiences};

    fn seeded() -> InMemoryExperiences {
        let repo = InMemoryExperiences::default();
        repo.insert_with("Old Co", |e| e.start_date = date(2019, 1, 1));
        repo.insert_with("Hidden Co", |e| {
            e.start_date = date(2022, 1, 1);
            e.is_visible = false;
        });
        repo.insert_with("Now Co", |e| {
            e.start_date = date(2018, 1, 1);
            e.is_current = true;
        });
        repo.insert_with("Recent Co", |e| e.start_date = date(2023, 6, 1));
        repo
    }

    fn companies(rows: &[WorkExperience]) -> Vec<&str> {
        rows.iter().map(|e| e.company.as_str()).collect()
    }

    #[tokio::test]
    async fn test_visible_list_is_ordered_and_filtered() {
        let service = ListExperiencesService::new(seeded());
        let rows = service.visible().await.unwrap();
        assert_eq!(companies(&rows), vec!["Now Co", "Recent Co", "Old Co"]);
    }

    #[tokio::test]
    async fn test_admin_list_includes_hidden_rows() {
        let service = ListExperiencesService::new(seeded());
        let rows = service.all(&admin_context()).await.unwrap();
        assert_eq!(
            companies(&rows),
            vec!["Now Co", "Recent Co", "Hidden Co", "Old Co"]
        );
    }

    #[tokio::test]
    async fn test_admin_list_requires_superuser() {
        let service = ListExperiencesService::new(seeded());
        assert!(matches!(
            service.all(&user_context()).await,
            Err(ListExperiencesError::Access(AccessError::Forbidden))
        ));
    }
}
