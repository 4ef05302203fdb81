use actix_web::{post, web, Responder};
use tracing::error;

use super::dto::{ProjectRequest, ProjectResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::access_denied;
use crate::auth::application::domain::entities::RequestContext;
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a project
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = ProjectRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<ProjectResponse>)),
        (
            status = 400,
            description = "Invalid fields or slug already in use",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "One or more fields are invalid",
                    "fields": { "slug": "This slug is already in use." }
                }
            })
        ),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    ctx: RequestContext,
    req: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .project
        .create
        .execute(&ctx, req.into_inner().into())
        .await
    {
        Ok(created) => ApiResponse::created(ProjectResponse::from(created)),

        Err(CreateProjectError::Access(e)) => access_denied(e),

        Err(CreateProjectError::Validation(errors)) => ApiResponse::validation_failed(&errors),

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
