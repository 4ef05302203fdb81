use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use crate::auth::application::domain::entities::{AccessError, Identity, RequestContext, UserId};
use crate::auth::application::ports::outgoing::token_provider::{TokenProvider, ACCESS_TOKEN};
use crate::auth::application::ports::outgoing::user_query::UserQuery;
use crate::shared::api::ApiResponse;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Builds the caller context from the `Authorization` header.
///
/// A request without the header is anonymous. A header that is present but
/// unusable is rejected with 401 instead of silently downgrading the caller.
///
/// When a `UserQuery` is registered as app data, a token claiming
/// administrator rights is checked against the account row, so a demoted or
/// deactivated admin loses mutation rights before the token expires.
impl FromRequest for RequestContext {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let resolved = resolve_context(req);
        let users = req
            .app_data::<web::Data<Arc<dyn UserQuery>>>()
            .map(|users| Arc::clone(users.get_ref()));

        Box::pin(async move {
            let ctx = resolved.map_err(create_api_error)?;
            match users {
                Some(users) => confirm_admin(ctx, users.as_ref())
                    .await
                    .map_err(create_api_error),
                None => Ok(ctx),
            }
        })
    }
}

async fn confirm_admin(
    ctx: RequestContext,
    users: &dyn UserQuery,
) -> Result<RequestContext, HttpResponse> {
    let Some(identity) = ctx.identity().copied().filter(|i| i.is_superuser) else {
        return Ok(ctx);
    };

    let account = users.find_by_id(identity.user_id).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load account for admin check");
        ApiResponse::internal_error()
    })?;

    match account {
        Some(account) if account.is_active => {
            if !account.is_superuser {
                tracing::info!(user_id = %identity.user_id, "Admin token presented by demoted account");
            }
            Ok(RequestContext::authenticated(Identity {
                user_id: identity.user_id,
                is_superuser: account.is_superuser,
            }))
        }
        _ => {
            tracing::warn!(user_id = %identity.user_id, "Admin token for missing or inactive account");
            Err(ApiResponse::unauthorized(
                "ACCOUNT_INACTIVE",
                "Account is inactive or no longer exists",
            ))
        }
    }
}

fn resolve_context(req: &HttpRequest) -> Result<RequestContext, HttpResponse> {
    let Some(header) = req.headers().get("Authorization") else {
        return Ok(RequestContext::anonymous());
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            ApiResponse::unauthorized(
                "INVALID_AUTH_HEADER",
                "Authorization header must use the Bearer scheme",
            )
        })?;

    let provider = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| {
            tracing::error!("Token provider is not registered as app data");
            ApiResponse::internal_error()
        })?;

    let claims = provider.verify_token(token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
    })?;

    if claims.token_type != ACCESS_TOKEN {
        return Err(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        ));
    }

    Ok(RequestContext::authenticated(Identity {
        user_id: UserId::from(claims.sub),
        is_superuser: claims.is_superuser,
    }))
}

/// Maps a failed admin check onto the HTTP status the caller should see.
pub fn access_denied(err: AccessError) -> HttpResponse {
    match err {
        AccessError::Unauthenticated => {
            ApiResponse::unauthorized("AUTHENTICATION_REQUIRED", "Authentication required")
        }
        AccessError::Forbidden => {
            ApiResponse::forbidden("ADMIN_REQUIRED", "Administrator privileges required")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::user_query::{
        UserQueryError, UserQueryResult,
    };
    use crate::tests::support::auth_helper::{bearer, token, token_provider_data};
    use actix_web::{get, test, App, Responder};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    struct OneAccount {
        id: Uuid,
        is_superuser: bool,
        is_active: bool,
    }

    #[async_trait]
    impl UserQuery for OneAccount {
        async fn find_by_id(
            &self,
            user_id: UserId,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            if user_id.value() != self.id {
                return Ok(None);
            }
            Ok(Some(UserQueryResult {
                id: user_id,
                username: "admin".to_string(),
                email: "admin@example.com".to_string(),
                password_hash: String::new(),
                is_superuser: self.is_superuser,
                is_active: self.is_active,
                first_name: String::new(),
                last_name: String::new(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }))
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            Ok(None)
        }
    }

    fn users_data(account: OneAccount) -> web::Data<Arc<dyn UserQuery>> {
        let users: Arc<dyn UserQuery> = Arc::new(account);
        web::Data::new(users)
    }

    #[get("/whoami")]
    async fn whoami(ctx: RequestContext) -> impl Responder {
        match ctx.identity() {
            Some(identity) => ApiResponse::success(serde_json::json!({
                "user_id": identity.user_id,
                "is_superuser": identity.is_superuser,
            })),
            None => ApiResponse::success(serde_json::json!({ "anonymous": true })),
        }
    }

    #[actix_web::test]
    async fn test_missing_header_is_anonymous() {
        let app = test::init_service(
            App::new()
                .app_data(token_provider_data())
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["anonymous"], true);
    }

    #[actix_web::test]
    async fn test_valid_admin_token() {
        let app = test::init_service(
            App::new()
                .app_data(token_provider_data())
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", bearer(true)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["is_superuser"], true);
    }

    #[actix_web::test]
    async fn test_non_bearer_header_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(token_provider_data())
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Basic YWRtaW46YWRtaW4="))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_garbage_token_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(token_provider_data())
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn test_demoted_admin_token_is_downgraded() {
        let id = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(token_provider_data())
                .app_data(users_data(OneAccount {
                    id,
                    is_superuser: false,
                    is_active: true,
                }))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token(id, true))))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["is_superuser"], false);
    }

    #[actix_web::test]
    async fn test_deactivated_admin_token_rejected() {
        let id = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(token_provider_data())
                .app_data(users_data(OneAccount {
                    id,
                    is_superuser: true,
                    is_active: false,
                }))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token(id, true))))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ACCOUNT_INACTIVE");
    }

    #[actix_web::test]
    async fn test_active_admin_keeps_rights() {
        let id = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(token_provider_data())
                .app_data(users_data(OneAccount {
                    id,
                    is_superuser: true,
                    is_active: true,
                }))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token(id, true))))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["is_superuser"], true);
    }

    #[actix_web::test]
    async fn test_access_denied_statuses() {
        assert_eq!(access_denied(AccessError::Unauthenticated).status(), 401);
        assert_eq!(access_denied(AccessError::Forbidden).status(), 403);
    }
}
