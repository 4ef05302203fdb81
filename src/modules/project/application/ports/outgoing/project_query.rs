// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct ProjectListFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

pub const DEFAULT_PER_PAGE: u32 = 12;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Clamps client-supplied values into a usable window.
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * self.per_page as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

/// Lists are ordered by `order asc, created_at desc`.
#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn get_by_id(&self, project_id: Uuid) -> Result<Project, ProjectQueryError>;

    /// Slug lookup is case-insensitive.
    async fn get_by_slug(&self, slug: &str) -> Result<Project, ProjectQueryError>;

    async fn list(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Project>, ProjectQueryError>;

    async fn featured(&self) -> Result<Vec<Project>, ProjectQueryError>;

    /// Distinct non-empty categories, alphabetical.
    async fn categories(&self) -> Result<Vec<String>, ProjectQueryError>;
}
