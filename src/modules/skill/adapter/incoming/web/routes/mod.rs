pub mod dto;
mod list_skills;
mod manage_skill;

pub use list_skills::{
    __path_list_all_skills_handler, __path_list_skills_handler, list_all_skills_handler,
    list_skills_handler,
};
pub use manage_skill::{
    __path_create_skill_handler, __path_delete_skill_handler, __path_update_skill_handler,
    create_skill_handler, delete_skill_handler, update_skill_handler,
};
