mod about_content;
mod content_handlers;
pub mod dto;
mod home_content;

pub use about_content::{
    __path_activate_about_content_handler, __path_create_about_content_handler,
    __path_delete_about_content_handler, __path_get_about_content_handler,
    __path_list_about_content_handler, __path_update_about_content_handler,
    activate_about_content_handler, create_about_content_handler, delete_about_content_handler,
    get_about_content_handler, list_about_content_handler, update_about_content_handler,
};
pub use home_content::{
    __path_activate_home_content_handler, __path_create_home_content_handler,
    __path_delete_home_content_handler, __path_get_home_content_handler,
    __path_list_home_content_handler, __path_update_home_content_handler,
    activate_home_content_handler, create_home_content_handler, delete_home_content_handler,
    get_home_content_handler, list_home_content_handler, update_home_content_handler,
};
