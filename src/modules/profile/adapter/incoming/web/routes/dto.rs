use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{Profile, ProfileInput};

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ProfileRequest {
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Comma-separated
    pub skills: Option<String>,
    pub resume_url: Option<String>,
}

impl From<ProfileRequest> for ProfileInput {
    fn from(req: ProfileRequest) -> Self {
        ProfileInput {
            bio: req.bio,
            profile_picture_url: req.profile_picture_url,
            phone: req.phone,
            address: req.address,
            skills: req.skills,
            resume_url: req.resume_url,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub skills: Option<String>,
    pub skills_list: Vec<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        let skills_list = p.skills_list();
        ProfileResponse {
            id: p.id,
            user_id: p.user_id,
            bio: p.bio,
            profile_picture_url: p.profile_picture_url,
            phone: p.phone,
            address: p.address,
            skills: p.skills,
            skills_list,
            resume_url: p.resume_url,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
