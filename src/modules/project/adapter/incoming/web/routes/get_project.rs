use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::ProjectResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn respond(result: Result<Project, GetProjectError>) -> HttpResponse {
    match result {
        Ok(project) => ApiResponse::success(ProjectResponse::from(project)),

        Err(GetProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetProjectError::QueryError(e)) => {
            error!("Failed to load project: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Fetch a single project by id
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project found", body = inline(SuccessResponse<ProjectResponse>)),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.project.get.by_id(path.into_inner()).await)
}

/// Fetch a single project by slug (case-insensitive)
#[utoipa::path(
    get,
    path = "/api/projects/slug/{slug}",
    tag = "projects",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project found", body = inline(SuccessResponse<ProjectResponse>)),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[get("/api/projects/slug/{slug}")]
pub async fn get_project_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.project.get.by_slug(&path.into_inner()).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::project_test_fixtures::InMemoryProjects;

    #[actix_web::test]
    async fn test_get_by_id_is_public() {
        let repo = InMemoryProjects::default();
        let existing = repo.insert("Visible", "visible");
        let app_state = TestAppStateBuilder::default().with_projects(repo).build();

        let app = test::init_service(
            App::new().app_data(app_state).service(get_project_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/projects/{}", existing.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["slug"], "visible");
    }

    #[actix_web::test]
    async fn test_get_by_slug_ignores_case() {
        let repo = InMemoryProjects::default();
        repo.insert("Visible", "visible");
        let app_state = TestAppStateBuilder::default().with_projects(repo).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_project_by_slug_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects/slug/ViSiBlE")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_unknown_slug_is_404() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_project_by_slug_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects/slug/nope")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }
}
