use std::sync::Arc;

use crate::modules::skill::application::ports::incoming::use_cases::{
    ListSkillsUseCase, ManageSkillUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub list: Arc<dyn ListSkillsUseCase + Send + Sync>,
    pub manage: Arc<dyn ManageSkillUseCase + Send + Sync>,
}
