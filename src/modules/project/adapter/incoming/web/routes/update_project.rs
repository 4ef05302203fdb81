use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::{ProjectRequest, ProjectResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::access_denied;
use crate::auth::application::domain::entities::RequestContext;
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace a project's editable fields
///
/// Omitting `slug` keeps the current one; title changes never regenerate it.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = ProjectRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Project updated", body = inline(SuccessResponse<ProjectResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    ctx: RequestContext,
    path: web::Path<Uuid>,
    req: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .project
        .update
        .execute(&ctx, project_id, req.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(ProjectResponse::from(updated)),

        Err(UpdateProjectError::Access(e)) => access_denied(e),

        Err(UpdateProjectError::Validation(errors)) => ApiResponse::validation_failed(&errors),

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!(%project_id, "Repository error updating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
