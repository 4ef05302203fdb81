pub mod dto;
mod list_experiences;
mod manage_experience;

pub use list_experiences::{
    __path_list_all_experiences_handler, __path_list_experiences_handler,
    list_all_experiences_handler, list_experiences_handler,
};
pub use manage_experience::{
    __path_create_experience_handler, __path_delete_experience_handler,
    __path_update_experience_handler, create_experience_handler, delete_experience_handler,
    update_experience_handler,
};
