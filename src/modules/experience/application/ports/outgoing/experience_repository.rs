use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::WorkExperience;

/// Validated editable columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceFields {
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub company_logo_url: Option<String>,
    pub technologies: Option<String>,
    pub order: i32,
    pub is_visible: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create_experience(
        &self,
        fields: ExperienceFields,
    ) -> Result<WorkExperience, ExperienceRepositoryError>;

    async fn update_experience(
        &self,
        id: Uuid,
        fields: ExperienceFields,
    ) -> Result<WorkExperience, ExperienceRepositoryError>;

    async fn delete_experience(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;
}
