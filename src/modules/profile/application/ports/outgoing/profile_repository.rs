use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::Profile;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFields {
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub skills: Option<String>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, ProfileRepositoryError>;

    /// Creates the user's profile or replaces its fields.
    async fn upsert(
        &self,
        user_id: Uuid,
        fields: ProfileFields,
    ) -> Result<Profile, ProfileRepositoryError>;

    /// Earliest created profile, shown on the public about page.
    async fn first(&self) -> Result<Option<Profile>, ProfileRepositoryError>;
}
