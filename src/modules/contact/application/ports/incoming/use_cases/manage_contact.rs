use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccessError, RequestContext};
use crate::modules::contact::application::domain::entities::{
    ContactFilter, ContactMessage, MessageFlag,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ManageContactError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("contact message not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ManageContactUseCase: Send + Sync {
    async fn list(
        &self,
        ctx: &RequestContext,
        filter: ContactFilter,
    ) -> Result<Vec<ContactMessage>, ManageContactError>;

    /// Viewing a message leaves `is_read` untouched.
    async fn get(&self, ctx: &RequestContext, id: Uuid)
        -> Result<ContactMessage, ManageContactError>;

    async fn set_flag(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        flag: MessageFlag,
        value: bool,
    ) -> Result<ContactMessage, ManageContactError>;

    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), ManageContactError>;
}
