use std::sync::Arc;

use crate::modules::site_content::application::domain::entities::{
    AboutFields, ContentFields, HomeFields,
};
use crate::modules::site_content::application::ports::incoming::use_cases::{
    GetActiveContentUseCase, ManageContentUseCase,
};
use crate::modules::site_content::application::ports::outgoing::ContentRepository;
use crate::modules::site_content::application::service::{
    GetActiveContentService, ManageContentService,
};

pub struct ContentUseCases<F: ContentFields> {
    pub active: Arc<dyn GetActiveContentUseCase<F> + Send + Sync>,
    pub manage: Arc<dyn ManageContentUseCase<F> + Send + Sync>,
}

impl<F: ContentFields> ContentUseCases<F> {
    /// Wires both services over the same content table.
    pub fn over<R>(repository: R) -> Self
    where
        R: ContentRepository<F> + Clone + 'static,
    {
        Self {
            active: Arc::new(GetActiveContentService::new(repository.clone())),
            manage: Arc::new(ManageContentService::new(repository)),
        }
    }
}

impl<F: ContentFields> Clone for ContentUseCases<F> {
    fn clone(&self) -> Self {
        Self {
            active: Arc::clone(&self.active),
            manage: Arc::clone(&self.manage),
        }
    }
}

#[derive(Clone)]
pub struct SiteContentUseCases {
    pub home: ContentUseCases<HomeFields>,
    pub about: ContentUseCases<AboutFields>,
}
