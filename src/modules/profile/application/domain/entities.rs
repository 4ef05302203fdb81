use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::text::split_comma;

/// Extended details attached one-to-one to a user account.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub skills: Option<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn skills_list(&self) -> Vec<String> {
        split_comma(self.skills.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileInput {
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub skills: Option<String>,
    pub resume_url: Option<String>,
}
