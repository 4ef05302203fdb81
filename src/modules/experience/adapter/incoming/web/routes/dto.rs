use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{ExperienceInput, WorkExperience};

fn visible_by_default() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ExperienceRequest {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    pub location: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Date, example = "2023-06-01")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    pub company_logo_url: Option<String>,
    /// Comma-separated
    pub technologies: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "visible_by_default")]
    pub is_visible: bool,
}

impl From<ExperienceRequest> for ExperienceInput {
    fn from(req: ExperienceRequest) -> Self {
        ExperienceInput {
            company: req.company,
            position: req.position,
            location: req.location,
            description: req.description,
            start_date: req.start_date,
            end_date: req.end_date,
            is_current: req.is_current,
            company_logo_url: req.company_logo_url,
            technologies: req.technologies,
            order: req.order,
            is_visible: req.is_visible,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExperienceResponse {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub company_logo_url: Option<String>,
    pub technologies: Option<String>,
    pub technologies_list: Vec<String>,
    pub order: i32,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WorkExperience> for ExperienceResponse {
    fn from(e: WorkExperience) -> Self {
        let technologies_list = e.technologies_list();
        ExperienceResponse {
            id: e.id,
            company: e.company,
            position: e.position,
            location: e.location,
            description: e.description,
            start_date: e.start_date,
            end_date: e.end_date,
            is_current: e.is_current,
            company_logo_url: e.company_logo_url,
            technologies: e.technologies,
            technologies_list,
            order: e.order,
            is_visible: e.is_visible,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

pub fn to_responses(rows: Vec<WorkExperience>) -> Vec<ExperienceResponse> {
    rows.into_iter().map(ExperienceResponse::from).collect()
}
