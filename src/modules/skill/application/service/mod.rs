mod list_skills_service;
mod manage_skill_service;
pub mod skill_validation;

pub use list_skills_service::ListSkillsService;
pub use manage_skill_service::ManageSkillService;
