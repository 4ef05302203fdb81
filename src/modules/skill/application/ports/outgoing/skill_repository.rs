use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{Skill, SkillCategory};

#[derive(Debug, Clone, PartialEq)]
pub struct SkillFields {
    pub name: String,
    pub category: SkillCategory,
    pub proficiency_level: i32,
    pub icon: Option<String>,
    pub is_visible: bool,
    pub order: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, fields: SkillFields) -> Result<Skill, SkillRepositoryError>;

    async fn update_skill(&self, id: Uuid, fields: SkillFields)
        -> Result<Skill, SkillRepositoryError>;

    async fn delete_skill(&self, id: Uuid) -> Result<(), SkillRepositoryError>;
}
