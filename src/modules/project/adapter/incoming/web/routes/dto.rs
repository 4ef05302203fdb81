use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::modules::project::application::ports::outgoing::project_query::PageResult;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Editable project fields. Missing keys fall back to empty values so that
/// the field-level validator can report them.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ProjectRequest {
    #[schema(example = "Portfolio backend")]
    pub title: String,

    /// Derived from the title when omitted on create; kept when omitted on update.
    #[schema(example = "portfolio-backend")]
    pub slug: Option<String>,

    pub description: String,
    pub detailed_description: Option<String>,
    pub image_url: Option<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,

    /// Comma-separated
    #[schema(example = "Rust, Actix Web, PostgreSQL")]
    pub technologies: String,

    pub category: Option<String>,
    pub featured: bool,
    pub order: i32,
    pub created: Option<NaiveDate>,
}

impl From<ProjectRequest> for ProjectInput {
    fn from(req: ProjectRequest) -> Self {
        ProjectInput {
            title: req.title,
            slug: req.slug,
            description: req.description,
            detailed_description: req.detailed_description,
            image_url: req.image_url,
            github_link: req.github_link,
            live_link: req.live_link,
            technologies: req.technologies,
            category: req.category,
            featured: req.featured,
            order: req.order,
            created: req.created,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub detailed_description: Option<String>,
    pub image_url: Option<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub technologies: String,
    #[schema(example = json!(["Rust", "Actix Web"]))]
    pub technologies_list: Vec<String>,
    pub category: Option<String>,
    pub featured: bool,
    pub order: i32,
    pub created: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        let technologies_list = project.technologies_list();
        ProjectResponse {
            id: project.id,
            title: project.title,
            slug: project.slug,
            description: project.description,
            detailed_description: project.detailed_description,
            image_url: project.image_url,
            github_link: project.github_link,
            live_link: project.live_link,
            technologies: project.technologies,
            technologies_list,
            category: project.category,
            featured: project.featured,
            order: project.order,
            created: project.created,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

pub fn to_responses(projects: Vec<Project>) -> Vec<ProjectResponse> {
    projects.into_iter().map(ProjectResponse::from).collect()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectPageResponse {
    pub items: Vec<ProjectResponse>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl From<PageResult<Project>> for ProjectPageResponse {
    fn from(page: PageResult<Project>) -> Self {
        ProjectPageResponse {
            items: to_responses(page.items),
            page: page.page,
            per_page: page.per_page,
            total: page.total,
        }
    }
}
