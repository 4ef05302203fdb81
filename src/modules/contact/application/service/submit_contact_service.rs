use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::contact::application::domain::entities::{
    ClientInfo, ContactMessage, ContactSubmission,
};
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{ContactNotifier, ContactRepository};
use crate::modules::contact::application::service::contact_validation::validate_submission;

pub struct SubmitContactService<R>
where
    R: ContactRepository,
{
    repository: R,
    notifier: Arc<dyn ContactNotifier + Send + Sync>,
}

impl<R> SubmitContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R, notifier: Arc<dyn ContactNotifier + Send + Sync>) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn submit(
        &self,
        submission: ContactSubmission,
        client: ClientInfo,
    ) -> Result<ContactMessage, SubmitContactError> {
        let new_message =
            validate_submission(submission, client).map_err(SubmitContactError::Validation)?;

        let stored = self
            .repository
            .create_message(new_message)
            .await
            .map_err(|e| SubmitContactError::RepositoryError(e.to_string()))?;

        info!(message_id = %stored.id, "Contact message received");

        // The submission is already committed; delivery problems only get logged.
        if let Err(e) = self.notifier.notify(&stored).await {
            warn!(message_id = %stored.id, error = %e, "Contact notification failed");
        }

        Ok(stored)
    }
}
