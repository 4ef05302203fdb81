mod list_skills;
mod manage_skill;

pub use list_skills::{ListSkillsError, ListSkillsUseCase};
pub use manage_skill::{ManageSkillError, ManageSkillUseCase};
