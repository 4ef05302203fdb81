mod list_experiences;
mod manage_experience;

pub use list_experiences::{ListExperiencesError, ListExperiencesUseCase};
pub use manage_experience::{ManageExperienceError, ManageExperienceUseCase};
