use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{Identity, RequestContext, UserId};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "portfolio-test".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config())
}

/// The token provider as handlers look it up from app data.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service());
    web::Data::new(provider)
}

pub fn token(user_id: Uuid, is_superuser: bool) -> String {
    jwt_service()
        .generate_access_token(user_id, is_superuser)
        .unwrap()
}

/// Ready-to-use `Authorization` header value for a fresh user.
pub fn bearer(is_superuser: bool) -> String {
    format!("Bearer {}", token(Uuid::new_v4(), is_superuser))
}

pub fn admin_context() -> RequestContext {
    RequestContext::authenticated(Identity {
        user_id: UserId::from(Uuid::new_v4()),
        is_superuser: true,
    })
}

pub fn user_context() -> RequestContext {
    RequestContext::authenticated(Identity {
        user_id: UserId::from(Uuid::new_v4()),
        is_superuser: false,
    })
}
