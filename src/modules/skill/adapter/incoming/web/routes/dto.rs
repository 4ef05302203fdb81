use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{
    Skill, SkillCategory, SkillGroup, SkillInput, DEFAULT_PROFICIENCY,
};

fn default_proficiency() -> i32 {
    DEFAULT_PROFICIENCY
}

fn visible_by_default() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SkillRequest {
    #[serde(default)]
    pub name: String,
    /// One of programming, framework, database, tool, soft, other
    #[schema(example = "programming")]
    pub category: Option<String>,
    #[serde(default = "default_proficiency")]
    #[schema(minimum = 0, maximum = 100, example = 50)]
    pub proficiency_level: i32,
    #[schema(example = "fab fa-python")]
    pub icon: Option<String>,
    #[serde(default = "visible_by_default")]
    pub is_visible: bool,
    #[serde(default)]
    pub order: i32,
}

impl From<SkillRequest> for SkillInput {
    fn from(req: SkillRequest) -> Self {
        SkillInput {
            name: req.name,
            category: req.category,
            proficiency_level: req.proficiency_level,
            icon: req.icon,
            is_visible: req.is_visible,
            order: req.order,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SkillResponse {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = String, example = "programming")]
    pub category: SkillCategory,
    pub category_display: String,
    pub proficiency_level: i32,
    pub icon: Option<String>,
    pub is_visible: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Skill> for SkillResponse {
    fn from(s: Skill) -> Self {
        SkillResponse {
            id: s.id,
            name: s.name,
            category_display: s.category.label().to_string(),
            category: s.category,
            proficiency_level: s.proficiency_level,
            icon: s.icon,
            is_visible: s.is_visible,
            order: s.order,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SkillGroupResponse {
    #[schema(value_type = String, example = "framework")]
    pub category: SkillCategory,
    pub label: String,
    pub skills: Vec<SkillResponse>,
}

impl From<SkillGroup> for SkillGroupResponse {
    fn from(g: SkillGroup) -> Self {
        SkillGroupResponse {
            category: g.category,
            label: g.category.label().to_string(),
            skills: g.skills.into_iter().map(SkillResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SkillListQuery {
    /// Bucket the list by category
    pub grouped: Option<bool>,
}
