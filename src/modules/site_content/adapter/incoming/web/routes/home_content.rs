use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use super::content_handlers;
use super::dto::{CreateHomeContentRequest, HomeContentRequest, HomeContentResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::RequestContext;
use crate::modules::site_content::application::domain::entities::HomeFields;
use crate::AppState;

/// Active home page content
///
/// The first read on an empty table creates the default entry.
#[utoipa::path(
    get,
    path = "/api/content/home",
    tag = "content",
    responses(
        (status = 200, description = "Active home content", body = inline(SuccessResponse<HomeContentResponse>)),
    )
)]
#[get("/api/content/home")]
pub async fn get_home_content_handler(data: web::Data<AppState>) -> impl Responder {
    content_handlers::get_active::<HomeFields, HomeContentResponse>(&data.site_content.home).await
}

/// Replace the active home page content
#[utoipa::path(
    put,
    path = "/api/content/home",
    tag = "content",
    request_body = HomeContentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated", body = inline(SuccessResponse<HomeContentResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
    )
)]
#[put("/api/content/home")]
pub async fn update_home_content_handler(
    ctx: RequestContext,
    req: web::Json<HomeContentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    content_handlers::update_active::<HomeFields, HomeContentResponse>(
        &data.site_content.home,
        &ctx,
        req.into_inner().into(),
    )
    .await
}

/// Every home content entry, newest first
#[utoipa::path(
    get,
    path = "/api/admin/content/home",
    tag = "content",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All entries", body = inline(SuccessResponse<Vec<HomeContentResponse>>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
    )
)]
#[get("/api/admin/content/home")]
pub async fn list_home_content_handler(
    ctx: RequestContext,
    data: web::Data<AppState>,
) -> impl Responder {
    content_handlers::list::<HomeFields, HomeContentResponse>(&data.site_content.home, &ctx).await
}

#[utoipa::path(
    post,
    path = "/api/admin/content/home",
    tag = "content",
    request_body = CreateHomeContentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Entry created", body = inline(SuccessResponse<HomeContentResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
    )
)]
#[post("/api/admin/content/home")]
pub async fn create_home_content_handler(
    ctx: RequestContext,
    req: web::Json<CreateHomeContentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    content_handlers::create::<HomeFields, HomeContentResponse>(
        &data.site_content.home,
        &ctx,
        req.content.into(),
        req.is_active,
    )
    .await
}

/// Make an entry the active one
#[utoipa::path(
    post,
    path = "/api/admin/content/home/{id}/activate",
    tag = "content",
    params(("id" = Uuid, Path, description = "Entry id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Activated", body = inline(SuccessResponse<HomeContentResponse>)),
        (status = 404, description = "Entry not found", body = ErrorResponse),
    )
)]
#[post("/api/admin/content/home/{id}/activate")]
pub async fn activate_home_content_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    content_handlers::activate::<HomeFields, HomeContentResponse>(
        &data.site_content.home,
        &ctx,
        path.into_inner(),
    )
    .await
}

/// Delete an inactive entry
#[utoipa::path(
    delete,
    path = "/api/admin/content/home/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Entry id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Entry is the active one", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/content/home/{id}")]
pub async fn delete_home_content_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    content_handlers::delete(&data.site_content.home, &ctx, path.into_inner()).await
}
