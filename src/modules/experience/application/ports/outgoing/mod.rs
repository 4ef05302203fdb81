pub mod experience_query;
pub mod experience_repository;

pub use experience_query::{ExperienceQuery, ExperienceQueryError, Visibility};
pub use experience_repository::{
    ExperienceFields, ExperienceRepository, ExperienceRepositoryError,
};
