use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::RequestContext;
use crate::modules::contact::application::domain::entities::{
    ContactFilter, ContactMessage, MessageFlag,
};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ManageContactError, ManageContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactQuery, ContactQueryError, ContactRepository, ContactRepositoryError,
};

impl From<ContactRepositoryError> for ManageContactError {
    fn from(err: ContactRepositoryError) -> Self {
        match err {
            ContactRepositoryError::NotFound => ManageContactError::NotFound,
            ContactRepositoryError::DatabaseError(msg) => ManageContactError::RepositoryError(msg),
        }
    }
}

impl From<ContactQueryError> for ManageContactError {
    fn from(err: ContactQueryError) -> Self {
        match err {
            ContactQueryError::DatabaseError(msg) => ManageContactError::RepositoryError(msg),
        }
    }
}

pub struct ManageContactService<R, Q>
where
    R: ContactRepository,
    Q: ContactQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> ManageContactService<R, Q>
where
    R: ContactRepository,
    Q: ContactQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> ManageContactUseCase for ManageContactService<R, Q>
where
    R: ContactRepository + Send + Sync,
    Q: ContactQuery + Send + Sync,
{
    async fn list(
        &self,
        ctx: &RequestContext,
        filter: ContactFilter,
    ) -> Result<Vec<ContactMessage>, ManageContactError> {
        ctx.require_admin()?;
        Ok(self.query.list(filter).await?)
    }

    async fn get(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<ContactMessage, ManageContactError> {
        ctx.require_admin()?;
        self.query
            .find(id)
            .await?
            .ok_or(ManageContactError::NotFound)
    }

    async fn set_flag(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        flag: MessageFlag,
        value: bool,
    ) -> Result<ContactMessage, ManageContactError> {
        ctx.require_admin()?;
        Ok(self.repository.set_flag(id, flag, value).await?)
    }

    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), ManageContactError> {
        let admin = ctx.require_admin()?;
        self.repository.delete_message(id).await?;

        info!(message_id = %id, by = %admin.user_id, "Contact message deleted");
        Ok(())
    }
}
