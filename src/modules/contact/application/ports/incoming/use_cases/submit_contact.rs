use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ClientInfo, ContactMessage, ContactSubmission,
};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("invalid submission: {0}")]
    Validation(ValidationErrors),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Public entry point; needs no request context.
#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn submit(
        &self,
        submission: ContactSubmission,
        client: ClientInfo,
    ) -> Result<ContactMessage, SubmitContactError>;
}
