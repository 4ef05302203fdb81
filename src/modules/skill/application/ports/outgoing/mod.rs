pub mod skill_query;
pub mod skill_repository;

pub use skill_query::{SkillQuery, SkillQueryError, Visibility};
pub use skill_repository::{SkillFields, SkillRepository, SkillRepositoryError};
