use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::RequestContext;
use crate::modules::profile::application::domain::entities::{Profile, ProfileInput};
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetPublicProfileError, GetPublicProfileUseCase, ManageProfileError, ManageProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{ProfileFields, ProfileRepository};
use crate::shared::validation::{optional_text, optional_url, ValidationErrors};

fn validate_profile(input: ProfileInput) -> Result<ProfileFields, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let fields = ProfileFields {
        bio: optional_text(&mut errors, "bio", input.bio, None),
        profile_picture_url: optional_url(&mut errors, "profile_picture_url", input.profile_picture_url),
        phone: optional_text(&mut errors, "phone", input.phone, Some(20)),
        address: optional_text(&mut errors, "address", input.address, Some(255)),
        skills: optional_text(&mut errors, "skills", input.skills, None),
        resume_url: optional_url(&mut errors, "resume_url", input.resume_url),
    };

    errors.into_result().map(|()| fields)
}

pub struct ProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> ProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetPublicProfileUseCase for ProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Profile, GetPublicProfileError> {
        self.repository
            .first()
            .await
            .map_err(|e| GetPublicProfileError::RepositoryError(e.to_string()))?
            .ok_or(GetPublicProfileError::NotFound)
    }
}

#[async_trait]
impl<R> ManageProfileUseCase for ProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn get_own(&self, ctx: &RequestContext) -> Result<Profile, ManageProfileError> {
        let admin = ctx.require_admin()?;
        self.repository
            .find_by_user(admin.user_id.value())
            .await
            .map_err(|e| ManageProfileError::RepositoryError(e.to_string()))?
            .ok_or(ManageProfileError::NotFound)
    }

    async fn upsert_own(
        &self,
        ctx: &RequestContext,
        input: ProfileInput,
    ) -> Result<Profile, ManageProfileError> {
        let admin = ctx.require_admin()?;
        let fields = validate_profile(input).map_err(ManageProfileError::Validation)?;

        let profile = self
            .repository
            .upsert(admin.user_id.value(), fields)
            .await
            .map_err(|e| ManageProfileError::RepositoryError(e.to_string()))?;

        info!(user_id = %admin.user_id, "Profile saved");
        Ok(profile)
    }
}
