use std::sync::Arc;

use crate::modules::experience::application::ports::incoming::use_cases::{
    ListExperiencesUseCase, ManageExperienceUseCase,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub list: Arc<dyn ListExperiencesUseCase + Send + Sync>,
    pub manage: Arc<dyn ManageExperienceUseCase + Send + Sync>,
}
