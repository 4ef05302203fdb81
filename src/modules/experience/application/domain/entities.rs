use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::shared::text::split_comma;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkExperience {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub company_logo_url: Option<String>,
    /// Comma-delimited
    pub technologies: Option<String>,
    pub order: i32,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkExperience {
    pub fn technologies_list(&self) -> Vec<String> {
        split_comma(self.technologies.as_deref())
    }
}

/// Raw admin input. `end_date` is not checked against `start_date` or
/// `is_current`.
#[derive(Debug, Clone)]
pub struct ExperienceInput {
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub company_logo_url: Option<String>,
    pub technologies: Option<String>,
    pub order: i32,
    pub is_visible: bool,
}

impl Default for ExperienceInput {
    fn default() -> Self {
        Self {
            company: String::new(),
            position: String::new(),
            location: None,
            description: None,
            start_date: None,
            end_date: None,
            is_current: false,
            company_logo_url: None,
            technologies: None,
            order: 0,
            is_visible: true,
        }
    }
}
