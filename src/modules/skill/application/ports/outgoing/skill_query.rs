use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    VisibleOnly,
    All,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Ordered `category asc, order asc, name asc`.
#[async_trait]
pub trait SkillQuery: Send + Sync {
    async fn list(&self, visibility: Visibility) -> Result<Vec<Skill>, SkillQueryError>;
}
