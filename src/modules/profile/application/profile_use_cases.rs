use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    GetPublicProfileUseCase, ManageProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub public: Arc<dyn GetPublicProfileUseCase + Send + Sync>,
    pub manage: Arc<dyn ManageProfileUseCase + Send + Sync>,
}
