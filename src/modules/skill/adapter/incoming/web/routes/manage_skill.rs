use actix_web::{delete, post, put, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::{SkillRequest, SkillResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::access_denied;
use crate::auth::application::domain::entities::RequestContext;
use crate::modules::skill::application::ports::incoming::use_cases::ManageSkillError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn manage_error(err: ManageSkillError) -> HttpResponse {
    match err {
        ManageSkillError::Access(e) => access_denied(e),
        ManageSkillError::Validation(errors) => ApiResponse::validation_failed(&errors),
        ManageSkillError::NotFound => ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found"),
        ManageSkillError::RepositoryError(e) => {
            error!("Repository error managing skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "skills",
    request_body = SkillRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Skill created", body = inline(SuccessResponse<SkillResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
    )
)]
#[post("/api/skills")]
pub async fn create_skill_handler(
    ctx: RequestContext,
    req: web::Json<SkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.manage.create(&ctx, req.into_inner().into()).await {
        Ok(created) => ApiResponse::created(SkillResponse::from(created)),
        Err(e) => manage_error(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/skills/{id}",
    tag = "skills",
    params(("id" = Uuid, Path, description = "Skill id")),
    request_body = SkillRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Skill updated", body = inline(SuccessResponse<SkillResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse),
    )
)]
#[put("/api/skills/{id}")]
pub async fn update_skill_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    req: web::Json<SkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .skill
        .manage
        .update(&ctx, path.into_inner(), req.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(SkillResponse::from(updated)),
        Err(e) => manage_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/skills/{id}",
    tag = "skills",
    params(("id" = Uuid, Path, description = "Skill id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Skill deleted"),
        (status = 404, description = "Skill not found", body = ErrorResponse),
    )
)]
#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.manage.delete(&ctx, path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => manage_error(e),
    }
}
