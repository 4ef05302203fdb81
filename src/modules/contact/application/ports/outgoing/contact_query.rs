use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{ContactFilter, ContactMessage};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactQuery: Send + Sync {
    /// Newest first.
    async fn list(&self, filter: ContactFilter) -> Result<Vec<ContactMessage>, ContactQueryError>;

    async fn find(&self, id: Uuid) -> Result<Option<ContactMessage>, ContactQueryError>;
}
