use async_trait::async_trait;

use crate::auth::application::domain::entities::RequestContext;
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    ListSkillsError, ListSkillsUseCase,
};
use crate::modules::skill::application::ports::outgoing::{SkillQuery, Visibility};

pub struct ListSkillsService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> ListSkillsService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListSkillsUseCase for ListSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn visible(&self) -> Result<Vec<Skill>, ListSkillsError> {
        self.query
            .list(Visibility::VisibleOnly)
            .await
            .map_err(|e| ListSkillsError::QueryError(e.to_string()))
    }

    async fn all(&self, ctx: &RequestContext) -> Result<Vec<Skill>, ListSkillsError> {
        ctx.require_admin()?;
        self.query
            .list(Visibility::All)
            .await
            .map_err(|e| ListSkillsError::QueryError(e.to_string()))
    }
}
