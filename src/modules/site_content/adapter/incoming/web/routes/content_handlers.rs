//! Shared request flow for the home and about content routes.

use actix_web::HttpResponse;
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::access_denied;
use crate::auth::application::domain::entities::RequestContext;
use crate::modules::site_content::application::domain::entities::{ContentFields, ContentRecord};
use crate::modules::site_content::application::ports::incoming::use_cases::{
    GetActiveContentError, ManageContentError,
};
use crate::modules::site_content::application::site_content_use_cases::ContentUseCases;
use crate::shared::api::ApiResponse;

fn manage_error<F: ContentFields>(err: ManageContentError) -> HttpResponse {
    match err {
        ManageContentError::Access(e) => access_denied(e),
        ManageContentError::Validation(errors) => ApiResponse::validation_failed(&errors),
        ManageContentError::NotFound => {
            ApiResponse::not_found("CONTENT_NOT_FOUND", "Content entry not found")
        }
        ManageContentError::RepositoryError(e) => {
            error!(kind = F::KIND, "Repository error managing content: {}", e);
            ApiResponse::internal_error()
        }
    }
}

pub(super) async fn get_active<F, T>(uc: &ContentUseCases<F>) -> HttpResponse
where
    F: ContentFields,
    T: From<ContentRecord<F>> + Serialize,
{
    match uc.active.execute().await {
        Ok(record) => ApiResponse::success(T::from(record)),
        Err(GetActiveContentError::RepositoryError(e)) => {
            error!(kind = F::KIND, "Failed to load active content: {}", e);
            ApiResponse::internal_error()
        }
    }
}

pub(super) async fn update_active<F, T>(
    uc: &ContentUseCases<F>,
    ctx: &RequestContext,
    fields: F,
) -> HttpResponse
where
    F: ContentFields,
    T: From<ContentRecord<F>> + Serialize,
{
    match uc.manage.update_active(ctx, fields).await {
        Ok(record) => ApiResponse::success(T::from(record)),
        Err(e) => manage_error::<F>(e),
    }
}

pub(super) async fn list<F, T>(uc: &ContentUseCases<F>, ctx: &RequestContext) -> HttpResponse
where
    F: ContentFields,
    T: From<ContentRecord<F>> + Serialize,
{
    match uc.manage.list(ctx).await {
        Ok(records) => ApiResponse::success(records.into_iter().map(T::from).collect::<Vec<_>>()),
        Err(e) => manage_error::<F>(e),
    }
}

pub(super) async fn create<F, T>(
    uc: &ContentUseCases<F>,
    ctx: &RequestContext,
    fields: F,
    is_active: bool,
) -> HttpResponse
where
    F: ContentFields,
    T: From<ContentRecord<F>> + Serialize,
{
    match uc.manage.create(ctx, fields, is_active).await {
        Ok(record) => ApiResponse::created(T::from(record)),
        Err(e) => manage_error::<F>(e),
    }
}

pub(super) async fn activate<F, T>(
    uc: &ContentUseCases<F>,
    ctx: &RequestContext,
    id: Uuid,
) -> HttpResponse
where
    F: ContentFields,
    T: From<ContentRecord<F>> + Serialize,
{
    match uc.manage.activate(ctx, id).await {
        Ok(record) => ApiResponse::success(T::from(record)),
        Err(e) => manage_error::<F>(e),
    }
}

pub(super) async fn delete<F: ContentFields>(
    uc: &ContentUseCases<F>,
    ctx: &RequestContext,
    id: Uuid,
) -> HttpResponse {
    match uc.manage.delete(ctx, id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => manage_error::<F>(e),
    }
}
