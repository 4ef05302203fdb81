use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use super::content_handlers;
use super::dto::{AboutContentRequest, AboutContentResponse, CreateAboutContentRequest};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::RequestContext;
use crate::modules::site_content::application::domain::entities::AboutFields;
use crate::AppState;

/// Active about page content with derived lists
#[utoipa::path(
    get,
    path = "/api/content/about",
    tag = "content",
    responses(
        (status = 200, description = "Active about content", body = inline(SuccessResponse<AboutContentResponse>)),
    )
)]
#[get("/api/content/about")]
pub async fn get_about_content_handler(data: web::Data<AppState>) -> impl Responder {
    content_handlers::get_active::<AboutFields, AboutContentResponse>(&data.site_content.about)
        .await
}

#[utoipa::path(
    put,
    path = "/api/content/about",
    tag = "content",
    request_body = AboutContentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated", body = inline(SuccessResponse<AboutContentResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
    )
)]
#[put("/api/content/about")]
pub async fn update_about_content_handler(
    ctx: RequestContext,
    req: web::Json<AboutContentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    content_handlers::update_active::<AboutFields, AboutContentResponse>(
        &data.site_content.about,
        &ctx,
        req.into_inner().into(),
    )
    .await
}

#[utoipa::path(
    get,
    path = "/api/admin/content/about",
    tag = "content",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All entries", body = inline(SuccessResponse<Vec<AboutContentResponse>>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
    )
)]
#[get("/api/admin/content/about")]
pub async fn list_about_content_handler(
    ctx: RequestContext,
    data: web::Data<AppState>,
) -> impl Responder {
    content_handlers::list::<AboutFields, AboutContentResponse>(&data.site_content.about, &ctx)
        .await
}

#[utoipa::path(
    post,
    path = "/api/admin/content/about",
    tag = "content",
    request_body = CreateAboutContentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Entry created", body = inline(SuccessResponse<AboutContentResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
    )
)]
#[post("/api/admin/content/about")]
pub async fn create_about_content_handler(
    ctx: RequestContext,
    req: web::Json<CreateAboutContentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    content_handlers::create::<AboutFields, AboutContentResponse>(
        &data.site_content.about,
        &ctx,
        req.content.into(),
        req.is_active,
    )
    .await
}

#[utoipa::path(
    post,
    path = "/api/admin/content/about/{id}/activate",
    tag = "content",
    params(("id" = Uuid, Path, description = "Entry id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Activated", body = inline(SuccessResponse<AboutContentResponse>)),
        (status = 404, description = "Entry not found", body = ErrorResponse),
    )
)]
#[post("/api/admin/content/about/{id}/activate")]
pub async fn activate_about_content_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    content_handlers::activate::<AboutFields, AboutContentResponse>(
        &data.site_content.about,
        &ctx,
        path.into_inner(),
    )
    .await
}

#[utoipa::path(
    delete,
    path = "/api/admin/content/about/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Entry id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Entry is the active one", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/content/about/{id}")]
pub async fn delete_about_content_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    content_handlers::delete(&data.site_content.about, &ctx, path.into_inner()).await
}
