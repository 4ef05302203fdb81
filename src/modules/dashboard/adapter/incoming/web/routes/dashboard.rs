use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::access_denied;
use crate::auth::application::domain::entities::RequestContext;
use crate::modules::dashboard::application::domain::entities::DashboardStats;
use crate::modules::dashboard::application::ports::incoming::use_cases::GetDashboardStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Content counts", body = inline(SuccessResponse<DashboardStats>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Administrator privileges required", body = ErrorResponse),
    )
)]
#[get("/api/admin/dashboard")]
pub async fn dashboard_handler(ctx: RequestContext, data: web::Data<AppState>) -> impl Responder {
    match data.dashboard.execute(&ctx).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(GetDashboardStatsError::Access(e)) => access_denied(e),
        Err(GetDashboardStatsError::QueryError(e)) => {
            error!("Failed to load dashboard stats: {}", e);
            ApiResponse::internal_error()
        }
    }
}
