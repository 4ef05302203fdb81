use actix_web::{get, put, web, HttpResponse, Responder};
use tracing::error;

use super::dto::{ProfileRequest, ProfileResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::access_denied;
use crate::auth::application::domain::entities::RequestContext;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetPublicProfileError, ManageProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn profile_not_found() -> HttpResponse {
    ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
}

fn manage_error(err: ManageProfileError) -> HttpResponse {
    match err {
        ManageProfileError::Access(e) => access_denied(e),
        ManageProfileError::Validation(errors) => ApiResponse::validation_failed(&errors),
        ManageProfileError::NotFound => profile_not_found(),
        ManageProfileError::RepositoryError(e) => {
            error!("Repository error managing profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Public profile", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 404, description = "No profile yet", body = ErrorResponse),
    )
)]
#[get("/api/profile")]
pub async fn get_public_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.public.execute().await {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),
        Err(GetPublicProfileError::NotFound) => profile_not_found(),
        Err(GetPublicProfileError::RepositoryError(e)) => {
            error!("Failed to load public profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/profile",
    tag = "profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's profile", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 404, description = "No profile yet", body = ErrorResponse),
    )
)]
#[get("/api/admin/profile")]
pub async fn get_own_profile_handler(
    ctx: RequestContext,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.manage.get_own(&ctx).await {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),
        Err(e) => manage_error(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/profile",
    tag = "profile",
    request_body = ProfileRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile saved", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
    )
)]
#[put("/api/admin/profile")]
pub async fn upsert_own_profile_handler(
    ctx: RequestContext,
    req: web::Json<ProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .profile
        .manage
        .upsert_own(&ctx, req.into_inner().into())
        .await
    {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),
        Err(e) => manage_error(e),
    }
}
