use actix_web::{delete, post, put, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::{ExperienceRequest, ExperienceResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::access_denied;
use crate::auth::application::domain::entities::RequestContext;
use crate::modules::experience::application::ports::incoming::use_cases::ManageExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn manage_error(err: ManageExperienceError) -> HttpResponse {
    match err {
        ManageExperienceError::Access(e) => access_denied(e),
        ManageExperienceError::Validation(errors) => ApiResponse::validation_failed(&errors),
        ManageExperienceError::NotFound => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        ManageExperienceError::RepositoryError(e) => {
            error!("Repository error managing experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/experiences",
    tag = "experiences",
    request_body = ExperienceRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Experience created", body = inline(SuccessResponse<ExperienceResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
    )
)]
#[post("/api/experiences")]
pub async fn create_experience_handler(
    ctx: RequestContext,
    req: web::Json<ExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .experience
        .manage
        .create(&ctx, req.into_inner().into())
        .await
    {
        Ok(created) => ApiResponse::created(ExperienceResponse::from(created)),
        Err(e) => manage_error(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/experiences/{id}",
    tag = "experiences",
    params(("id" = Uuid, Path, description = "Experience id")),
    request_body = ExperienceRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Experience updated", body = inline(SuccessResponse<ExperienceResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
    )
)]
#[put("/api/experiences/{id}")]
pub async fn update_experience_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    req: web::Json<ExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .experience
        .manage
        .update(&ctx, path.into_inner(), req.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(ExperienceResponse::from(updated)),
        Err(e) => manage_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/experiences/{id}",
    tag = "experiences",
    params(("id" = Uuid, Path, description = "Experience id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Experience deleted"),
        (status = 404, description = "Experience not found", body = ErrorResponse),
    )
)]
#[delete("/api/experiences/{id}")]
pub async fn delete_experience_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.manage.delete(&ctx, path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => manage_error(e),
    }
}
