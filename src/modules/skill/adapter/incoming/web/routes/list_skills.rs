use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use super::dto::{SkillGroupResponse, SkillListQuery, SkillResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::access_denied;
use crate::auth::application::domain::entities::RequestContext;
use crate::modules::skill::application::domain::entities::{group_by_category, Skill};
use crate::modules::skill::application::ports::incoming::use_cases::ListSkillsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn respond(result: Result<Vec<Skill>, ListSkillsError>, grouped: bool) -> HttpResponse {
    match result {
        Ok(skills) if grouped => {
            let groups: Vec<SkillGroupResponse> = group_by_category(skills)
                .into_iter()
                .map(SkillGroupResponse::from)
                .collect();
            ApiResponse::success(groups)
        }
        Ok(skills) => {
            let rows: Vec<SkillResponse> = skills.into_iter().map(SkillResponse::from).collect();
            ApiResponse::success(rows)
        }
        Err(ListSkillsError::Access(e)) => access_denied(e),
        Err(ListSkillsError::QueryError(e)) => {
            error!("Failed to list skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Visible skills. With `grouped=true` the payload is a list of
/// `{category, label, skills}` buckets instead of a flat list.
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    params(SkillListQuery),
    responses(
        (status = 200, description = "Visible skills", body = inline(SuccessResponse<Vec<SkillResponse>>)),
    )
)]
#[get("/api/skills")]
pub async fn list_skills_handler(
    query: web::Query<SkillListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.skill.list.visible().await, query.grouped.unwrap_or(false))
}

#[utoipa::path(
    get,
    path = "/api/admin/skills",
    tag = "skills",
    params(SkillListQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All skills", body = inline(SuccessResponse<Vec<SkillResponse>>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
    )
)]
#[get("/api/admin/skills")]
pub async fn list_all_skills_handler(
    ctx: RequestContext,
    query: web::Query<SkillListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.skill.list.all(&ctx).await, query.grouped.unwrap_or(false))
}
