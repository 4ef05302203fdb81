use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessError, RequestContext};
use crate::modules::dashboard::application::domain::entities::DashboardStats;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDashboardStatsError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetDashboardStatsUseCase: Send + Sync {
    async fn execute(&self, ctx: &RequestContext) -> Result<DashboardStats, GetDashboardStatsError>;
}
