use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use super::dto::{to_responses, ExperienceResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::access_denied;
use crate::auth::application::domain::entities::RequestContext;
use crate::modules::experience::application::domain::entities::WorkExperience;
use crate::modules::experience::application::ports::incoming::use_cases::ListExperiencesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn respond(result: Result<Vec<WorkExperience>, ListExperiencesError>) -> HttpResponse {
    match result {
        Ok(rows) => ApiResponse::success(to_responses(rows)),
        Err(ListExperiencesError::Access(e)) => access_denied(e),
        Err(ListExperiencesError::QueryError(e)) => {
            error!("Failed to list experiences: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Visible work experience, current roles first
#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "experiences",
    responses(
        (status = 200, description = "Visible experiences", body = inline(SuccessResponse<Vec<ExperienceResponse>>)),
    )
)]
#[get("/api/experiences")]
pub async fn list_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    respond(data.experience.list.visible().await)
}

/// Every work experience row, including hidden ones
#[utoipa::path(
    get,
    path = "/api/admin/experiences",
    tag = "experiences",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All experiences", body = inline(SuccessResponse<Vec<ExperienceResponse>>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
    )
)]
#[get("/api/admin/experiences")]
pub async fn list_all_experiences_handler(
    ctx: RequestContext,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.experience.list.all(&ctx).await)
}
