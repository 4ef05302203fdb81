use async_trait::async_trait;

use crate::modules::site_content::application::domain::entities::{ContentFields, ContentRecord};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetActiveContentError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Public read of the row the site currently renders.
#[async_trait]
pub trait GetActiveContentUseCase<F: ContentFields>: Send + Sync {
    async fn execute(&self) -> Result<ContentRecord<F>, GetActiveContentError>;
}
