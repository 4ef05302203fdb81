use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::auth::application::ports::incoming::use_cases::{
    LoginError, LoginRequest, LoginUserResponse, LoginUserUseCase, UserInfo,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .query
            .find_by_username(request.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        // Inactive accounts look exactly like unknown ones to the caller.
        if !user.is_active {
            warn!(user_id = %user.id, "Login rejected for inactive account");
            return Err(LoginError::InvalidCredentials);
        }

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id.value(), user.is_superuser)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            access_token,
            expires_in: self.token_provider.access_token_ttl(),
            user: UserInfo {
                id: user.id,
                username: user.username,
                email: user.email,
                is_superuser: user.is_superuser,
            },
        })
    }
}
