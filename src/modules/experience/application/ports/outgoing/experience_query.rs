use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::WorkExperience;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    VisibleOnly,
    All,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Lists are ordered `is_current desc, start_date desc, order asc`.
#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    async fn list(&self, visibility: Visibility)
        -> Result<Vec<WorkExperience>, ExperienceQueryError>;
}
