use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::text::split_comma;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub detailed_description: Option<String>,
    pub image_url: Option<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    /// Comma-delimited; see [`Project::technologies_list`].
    pub technologies: String,
    pub category: Option<String>,
    pub featured: bool,
    pub order: i32,
    /// Date the project itself was started, as entered by the author.
    pub created: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn technologies_list(&self) -> Vec<String> {
        split_comma(Some(&self.technologies))
    }
}

/// Raw editable fields as submitted by an admin, before validation.
#[derive(Debug, Clone, Default)]
pub struct ProjectInput {
    pub title: String,
    pub slug: Option<String>,
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
