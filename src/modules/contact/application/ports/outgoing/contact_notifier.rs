use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
#[error("Notification failed: {0}")]
pub struct ContactNotifierError(pub String);

/// Outbound notice about a stored submission. Runs after the row is committed.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, message: &ContactMessage) -> Result<(), ContactNotifierError>;
}
