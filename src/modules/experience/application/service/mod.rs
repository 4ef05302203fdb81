pub mod experience_validation;
mod list_experiences_service;
mod manage_experience_service;

pub use list_experiences_service::ListExperiencesService;
pub use manage_experience_service::ManageExperienceService;
