use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::error;

use crate::modules::site_content::application::domain::entities::{ContentFields, ContentRecord};
use crate::modules::site_content::application::ports::incoming::use_cases::{
    GetActiveContentError, GetActiveContentUseCase,
};
use crate::modules::site_content::application::ports::outgoing::ContentRepository;

pub struct GetActiveContentService<F, R>
where
    F: ContentFields,
    R: ContentRepository<F>,
{
    repository: R,
    _fields: PhantomData<F>,
}

impl<F, R> GetActiveContentService<F, R>
where
    F: ContentFields,
    R: ContentRepository<F>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _fields: PhantomData,
        }
    }
}

#[async_trait]
impl<F, R> GetActiveContentUseCase<F> for GetActiveContentService<F, R>
where
    F: ContentFields,
    R: ContentRepository<F>,
{
    async fn execute(&self) -> Result<ContentRecord<F>, GetActiveContentError> {
        self.repository.get_active().await.map_err(|e| {
            error!(kind = F::KIND, "Failed to load active content: {}", e);
            GetActiveContentError::RepositoryError(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::site_content::application::domain::entities::{AboutFields, HomeFields};
    use crate::tests::support::content_test_fixtures::InMemoryContent;

    #[tokio::test]
    async fn test_first_read_creates_active_default() {
        let repo = InMemoryContent::<HomeFields>::default();
        let service = GetActiveContentService::new(repo.clone());

        let record = service.execute().await.unwrap();

        assert!(record.is_active);
        assert_eq!(record.fields, HomeFields::defaults());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_reads_reuse_the_same_row() {
        let repo = InMemoryContent::<AboutFields>::default();
        let service = GetActiveContentService::new(repo.clone());

        let first = service.execute().await.unwrap();
        let second = service.execute().await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported() {
        let repo = InMemoryContent::<HomeFields>::failing("db down");
        let service = GetActiveContentService::new(repo);

        assert!(matches!(
            service.execute().await,
            Err(GetActiveContentError::RepositoryError(_))
        ));
    }
}
