use async_trait::async_trait;

use crate::auth::application::domain::entities::RequestContext;
use crate::modules::dashboard::application::domain::entities::DashboardStats;
use crate::modules::dashboard::application::ports::incoming::use_cases::{
    GetDashboardStatsError, GetDashboardStatsUseCase,
};
use crate::modules::dashboard::application::ports::outgoing::DashboardQuery;

pub struct GetDashboardStatsService<Q>
where
    Q: DashboardQuery,
{
    query: Q,
}

impl<Q> GetDashboardStatsService<Q>
where
    Q: DashboardQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetDashboardStatsUseCase for GetDashboardStatsService<Q>
where
    Q: DashboardQuery + Send + Sync,
{
    async fn execute(&self, ctx: &RequestContext) -> Result<DashboardStats, GetDashboardStatsError> {
        ctx.require_admin()?;
        self.query
            .stats()
            .await
            .map_err(|e| GetDashboardStatsError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{AccessError, RequestContext};
    use crate::modules::dashboard::application::ports::outgoing::DashboardQueryError;
    use crate::tests::support::auth_helper::admin_context;

    struct FixedStats(Result<DashboardStats, DashboardQueryError>);

    #[async_trait]
    impl DashboardQuery for FixedStats {
        async fn stats(&self) -> Result<DashboardStats, DashboardQueryError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_admin_gets_stats() {
        let stats = DashboardStats {
            total_projects: 3,
            unread_messages: 1,
            ..Default::default()
        };
        let service = GetDashboardStatsService::new(FixedStats(Ok(stats)));
        assert_eq!(service.execute(&admin_context()).await.unwrap(), stats);
    }

    #[tokio::test]
    async fn test_anonymous_is_rejected() {
        let service = GetDashboardStatsService::new(FixedStats(Ok(DashboardStats::default())));
        assert!(matches!(
            service.execute(&RequestContext::anonymous()).await,
            Err(GetDashboardStatsError::Access(AccessError::Unauthenticated))
        ));
    }

    #[tokio::test]
    async fn test_query_error() {
        let service = GetDashboardStatsService::new(FixedStats(Err(
            DashboardQueryError::DatabaseError("boom".into()),
        )));
        assert!(matches!(
            service.execute(&admin_context()).await,
            Err(GetDashboardStatsError::QueryError(_))
        ));
    }
}
