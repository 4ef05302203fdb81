use async_trait::async_trait;

use crate::auth::application::ports::incoming::use_cases::{
    LoginError, LoginRequest, LoginUserResponse, LoginUserUseCase,
};
use crate::dashboard::application::domain::entities::DashboardStats;
use crate::dashboard::application::ports::outgoing::{DashboardQuery, DashboardQueryError};

/// Rejects every login; route tests that need a session swap in their own.
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

/// Dashboard query over an empty site.
pub struct EmptyDashboardQuery;

#[async_trait]
impl DashboardQuery for EmptyDashboardQuery {
    async fn stats(&self) -> Result<DashboardStats, DashboardQueryError> {
        Ok(DashboardStats::default())
    }
}
