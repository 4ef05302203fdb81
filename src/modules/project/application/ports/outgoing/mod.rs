pub mod project_query;
pub mod project_repository;

pub use project_query::{
    PageRequest, PageResult, ProjectListFilter, ProjectQuery, ProjectQueryError,
};
pub use project_repository::{
    NewProject, ProjectChanges, ProjectFields, ProjectRepository, ProjectRepositoryError,
};
