use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::LoginUserUseCase;

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
}
