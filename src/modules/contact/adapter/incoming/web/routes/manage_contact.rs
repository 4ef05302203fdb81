use actix_web::{delete, get, post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::{ContactListQuery, ContactMessageResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::access_denied;
use crate::auth::application::domain::entities::RequestContext;
use crate::modules::contact::application::domain::entities::{ContactMessage, MessageFlag};
use crate::modules::contact::application::ports::incoming::use_cases::ManageContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn respond<T, F>(result: Result<T, ManageContactError>, ok: F) -> HttpResponse
where
    F: FnOnce(T) -> HttpResponse,
{
    match result {
        Ok(value) => ok(value),
        Err(ManageContactError::Access(e)) => access_denied(e),
        Err(ManageContactError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Contact message not found")
        }
        Err(ManageContactError::RepositoryError(e)) => {
            error!("Repository error managing contact messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}

fn single(message: ContactMessage) -> HttpResponse {
    ApiResponse::success(ContactMessageResponse::from(message))
}

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    params(ContactListQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Messages, newest first", body = inline(SuccessResponse<Vec<ContactMessageResponse>>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
    )
)]
#[get("/api/contact")]
pub async fn list_contact_messages_handler(
    ctx: RequestContext,
    query: web::Query<ContactListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .contact
        .manage
        .list(&ctx, query.into_inner().into())
        .await;
    respond(result, |rows| {
        let rows: Vec<ContactMessageResponse> =
            rows.into_iter().map(ContactMessageResponse::from).collect();
        ApiResponse::success(rows)
    })
}

#[utoipa::path(
    get,
    path = "/api/contact/{id}",
    tag = "contact",
    params(("id" = Uuid, Path, description = "Message id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Message", body = inline(SuccessResponse<ContactMessageResponse>)),
        (status = 404, description = "Message not found", body = ErrorResponse),
    )
)]
#[get("/api/contact/{id}")]
pub async fn get_contact_message_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.contact.manage.get(&ctx, path.into_inner()).await, single)
}

async fn flag(
    ctx: RequestContext,
    id: Uuid,
    data: web::Data<AppState>,
    flag: MessageFlag,
    value: bool,
) -> HttpResponse {
    respond(
        data.contact.manage.set_flag(&ctx, id, flag, value).await,
        single,
    )
}

#[utoipa::path(
    post,
    path = "/api/contact/{id}/read",
    tag = "contact",
    params(("id" = Uuid, Path, description = "Message id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Marked read", body = inline(SuccessResponse<ContactMessageResponse>)),
        (status = 404, description = "Message not found", body = ErrorResponse),
    )
)]
#[post("/api/contact/{id}/read")]
pub async fn mark_read_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    flag(ctx, path.into_inner(), data, MessageFlag::Read, true).await
}

#[utoipa::path(
    post,
    path = "/api/contact/{id}/unread",
    tag = "contact",
    params(("id" = Uuid, Path, description = "Message id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Marked unread", body = inline(SuccessResponse<ContactMessageResponse>)),
        (status = 404, description = "Message not found", body = ErrorResponse),
    )
)]
#[post("/api/contact/{id}/unread")]
pub async fn mark_unread_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    flag(ctx, path.into_inner(), data, MessageFlag::Read, false).await
}

#[utoipa::path(
    post,
    path = "/api/contact/{id}/resolve",
    tag = "contact",
    params(("id" = Uuid, Path, description = "Message id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Marked resolved", body = inline(SuccessResponse<ContactMessageResponse>)),
        (status = 404, description = "Message not found", body = ErrorResponse),
    )
)]
#[post("/api/contact/{id}/resolve")]
pub async fn mark_resolved_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    flag(ctx, path.into_inner(), data, MessageFlag::Resolved, true).await
}

#[utoipa::path(
    post,
    path = "/api/contact/{id}/unresolve",
    tag = "contact",
    params(("id" = Uuid, Path, description = "Message id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Marked unresolved", body = inline(SuccessResponse<ContactMessageResponse>)),
        (status = 404, description = "Message not found", body = ErrorResponse),
    )
)]
#[post("/api/contact/{id}/unresolve")]
pub async fn mark_unresolved_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    flag(ctx, path.into_inner(), data, MessageFlag::Resolved, false).await
}

#[utoipa::path(
    delete,
    path = "/api/contact/{id}",
    tag = "contact",
    params(("id" = Uuid, Path, description = "Message id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 404, description = "Message not found", body = ErrorResponse),
    )
)]
#[delete("/api/contact/{id}")]
pub async fn delete_contact_message_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.contact.manage.delete(&ctx, path.into_inner()).await, |()| {
        ApiResponse::no_content()
    })
}
