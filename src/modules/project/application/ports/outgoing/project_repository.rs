// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Validated, normalized editable columns (everything except the slug).
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFields {
    pub title: String,
    pub description: String,
    pub detailed_description: Option<String>,
    pub image_url: Option<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub technologies: String,
    pub category: Option<String>,
    pub featured: bool,
    pub order: i32,
    pub created: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct NewProject {
    /// Already lowercased and non-empty.
    pub slug: String,
    pub fields: ProjectFields,
}

/// Full replacement of the editable columns.
/// `slug: None` keeps the stored slug.
#[derive(Debug, Clone)]
pub struct ProjectChanges {
    pub slug: Option<String>,
    pub fields: ProjectFields,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    /// Another row already owns the slug.
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

/// Every write checks slug uniqueness against all other rows inside the
/// same transaction as the write itself.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError>;

    async fn update_project(
        &self,
        project_id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError>;
}
