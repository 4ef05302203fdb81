mod get_public_profile;
mod manage_profile;

pub use get_public_profile::{GetPublicProfileError, GetPublicProfileUseCase};
pub use manage_profile::{ManageProfileError, ManageProfileUseCase};
