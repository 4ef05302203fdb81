use async_trait::async_trait;

use crate::modules::dashboard::application::domain::entities::DashboardStats;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DashboardQuery: Send + Sync {
    async fn stats(&self) -> Result<DashboardStats, DashboardQueryError>;
}
