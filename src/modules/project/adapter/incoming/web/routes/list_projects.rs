use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::dto::{to_responses, ProjectPageResponse, ProjectResponse};
use crate::api::schemas::SuccessResponse;
use crate::modules::project::application::ports::incoming::use_cases::ListProjectsError;
use crate::modules::project::application::ports::outgoing::project_query::{
    PageRequest, ProjectListFilter,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProjectsQuery {
    /// Exact category match
    pub category: Option<String>,
    pub featured: Option<bool>,
    /// 1-based, defaults to 1
    pub page: Option<u32>,
    /// Defaults to 12, capped at 100
    pub per_page: Option<u32>,
}

impl From<ListProjectsQuery> for (ProjectListFilter, PageRequest) {
    fn from(q: ListProjectsQuery) -> Self {
        let filter = ProjectListFilter {
            category: q.category,
            featured: q.featured,
        };
        (filter, PageRequest::new(q.page, q.per_page))
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// List projects, ordered by display order then newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(ListProjectsQuery),
    responses(
        (status = 200, description = "Page of projects", body = inline(SuccessResponse<ProjectPageResponse>)),
    )
)]
#[get("/api/projects")]
pub async fn list_projects_handler(
    query: web::Query<ListProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = query.into_inner().into();

    match data.project.list.list(filter, page).await {
        Ok(result) => ApiResponse::success(ProjectPageResponse::from(result)),

        Err(ListProjectsError::QueryError(e)) => {
            error!("Failed to list projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "projects",
    responses(
        (status = 200, description = "Featured projects", body = inline(SuccessResponse<Vec<ProjectResponse>>)),
    )
)]
#[get("/api/projects/featured")]
pub async fn featured_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.list.featured().await {
        Ok(projects) => ApiResponse::success(to_responses(projects)),

        Err(ListProjectsError::QueryError(e)) => {
            error!("Failed to list featured projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Distinct non-empty project categories, alphabetical
#[utoipa::path(
    get,
    path = "/api/projects/categories",
    tag = "projects",
    responses(
        (status = 200, description = "Category names", body = inline(SuccessResponse<Vec<String>>)),
    )
)]
#[get("/api/projects/categories")]
pub async fn project_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.list.categories().await {
        Ok(categories) => ApiResponse::success(categories),

        Err(ListProjectsError::QueryError(e)) => {
            error!("Failed to list project categories: {}", e);
            ApiResponse::internal_error()
        }
    }
}
