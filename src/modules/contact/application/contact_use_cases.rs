use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ManageContactUseCase, SubmitContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub manage: Arc<dyn ManageContactUseCase + Send + Sync>,
}
