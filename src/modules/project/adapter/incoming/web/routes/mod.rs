mod create_project;
mod delete_project;
pub mod dto;
mod get_project;
mod list_projects;
mod update_project;

pub use create_project::{__path_create_project_handler, create_project_handler};
pub use delete_project::{__path_delete_project_handler, delete_project_handler};
pub use get_project::{
    __path_get_project_by_slug_handler, __path_get_project_handler, get_project_by_slug_handler,
    get_project_handler,
};
pub use list_projects::{
    __path_featured_projects_handler, __path_list_projects_handler,
    __path_project_categories_handler, featured_projects_handler, list_projects_handler,
    project_categories_handler, ListProjectsQuery,
};
pub use update_project::{__path_update_project_handler, update_project_handler};
