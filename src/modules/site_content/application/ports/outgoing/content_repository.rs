use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::site_content::application::domain::entities::{
    ContentDraft, ContentFields, ContentRecord,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("content row not found")]
    NotFound,

    #[error("the active content row cannot be deleted")]
    ActiveRow,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Storage for a singleton content table.
///
/// Implementations keep at most one row active: every write that activates a
/// row clears the flag on all other rows inside the same transaction.
#[async_trait]
pub trait ContentRepository<F: ContentFields>: Send + Sync {
    /// The active row, inserting `F::defaults()` as the active row when the
    /// table has none. Never reports `NotFound`.
    async fn get_active(&self) -> Result<ContentRecord<F>, ContentRepositoryError>;

    async fn find(&self, id: Uuid) -> Result<ContentRecord<F>, ContentRepositoryError>;

    /// Newest first.
    async fn list(&self) -> Result<Vec<ContentRecord<F>>, ContentRepositoryError>;

    /// Inserts (`draft.id == None`) or updates the row.
    async fn save(&self, draft: ContentDraft<F>) -> Result<ContentRecord<F>, ContentRepositoryError>;

    async fn activate(&self, id: Uuid) -> Result<ContentRecord<F>, ContentRepositoryError>;

    /// Refuses with `ActiveRow` when the row is the active one.
    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError>;
}
