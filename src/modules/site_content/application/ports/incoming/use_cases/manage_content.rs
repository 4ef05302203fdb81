use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccessError, RequestContext};
use crate::modules::site_content::application::domain::entities::{ContentFields, ContentRecord};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ManageContentError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("invalid content: {0}")]
    Validation(ValidationErrors),

    #[error("content row not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Admin surface of a singleton content table.
#[async_trait]
pub trait ManageContentUseCase<F: ContentFields>: Send + Sync {
    /// Replaces the editable fields of the active row.
    async fn update_active(
        &self,
        ctx: &RequestContext,
        fields: F,
    ) -> Result<ContentRecord<F>, ManageContentError>;

    async fn list(&self, ctx: &RequestContext) -> Result<Vec<ContentRecord<F>>, ManageContentError>;

    async fn create(
        &self,
        ctx: &RequestContext,
        fields: F,
        is_active: bool,
    ) -> Result<ContentRecord<F>, ManageContentError>;

    async fn activate(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<ContentRecord<F>, ManageContentError>;

    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), ManageContentError>;
}
