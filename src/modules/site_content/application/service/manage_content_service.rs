use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::RequestContext;
use crate::modules::site_content::application::domain::entities::{
    ContentDraft, ContentFields, ContentRecord,
};
use crate::modules::site_content::application::ports::incoming::use_cases::{
    ManageContentError, ManageContentUseCase,
};
use crate::modules::site_content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};
use crate::shared::validation::ValidationErrors;

pub const ACTIVE_ROW_PROTECTED: &str =
    "The active content cannot be deleted. Activate another entry first.";

impl From<ContentRepositoryError> for ManageContentError {
    fn from(err: ContentRepositoryError) -> Self {
        match err {
            ContentRepositoryError::NotFound => ManageContentError::NotFound,
            ContentRepositoryError::ActiveRow => ManageContentError::Validation(
                ValidationErrors::single("is_active", ACTIVE_ROW_PROTECTED),
            ),
            ContentRepositoryError::DatabaseError(msg) => ManageContentError::RepositoryError(msg),
        }
    }
}

pub struct ManageContentService<F, R>
where
    F: ContentFields,
    R: ContentRepository<F>,
{
    repository: R,
    _fields: PhantomData<F>,
}

impl<F, R> ManageContentService<F, R>
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
impl<F, R> ManageContentUseCase<F> for ManageContentService<F, R>
where
    F: ContentFields,
    R: ContentRepository<F>,
{
    async fn update_active(
        &self,
        ctx: &RequestContext,
        fields: F,
    ) -> Result<ContentRecord<F>, ManageContentError> {
        ctx.require_admin()?;
        let fields = fields.validated().map_err(ManageContentError::Validation)?;

        let active = self.repository.get_active().await?;
        let saved = self
            .repository
            .save(ContentDraft {
                id: Some(active.id),
                fields,
                is_active: true,
            })
            .await?;

        info!(kind = F::KIND, id = %saved.id, "Active content updated");
        Ok(saved)
    }

    async fn list(&self, ctx: &RequestContext) -> Result<Vec<ContentRecord<F>>, ManageContentError> {
        ctx.require_admin()?;
        Ok(self.repository.list().await?)
    }

    async fn create(
        &self,
        ctx: &RequestContext,
        fields: F,
        is_active: bool,
    ) -> Result<ContentRecord<F>, ManageContentError> {
        ctx.require_admin()?;
        let fields = fields.validated().map_err(ManageContentError::Validation)?;

        let saved = self
            .repository
            .save(ContentDraft {
                id: None,
                fields,
                is_active,
            })
            .await?;

        info!(kind = F::KIND, id = %saved.id, is_active, "Content row created");
        Ok(saved)
    }

    async fn activate(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<ContentRecord<F>, ManageContentError> {
        ctx.require_admin()?;
        let record = self.repository.activate(id).await?;

        info!(kind = F::KIND, %id, "Content row activated");
        Ok(record)
    }

    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), ManageContentError> {
        ctx.require_admin()?;
        self.repository.delete(id).await?;

        info!(kind = F::KIND, %id, "Content row deleted");
        Ok(())
    }
}
