use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    ClientInfo, ContactMessage, MessageFlag,
};

/// A validated submission ready to persist; both flags start false.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub client: ClientInfo,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError>;

    async fn set_flag(
        &self,
        id: Uuid,
        flag: MessageFlag,
        value: bool,
    ) -> Result<ContactMessage, ContactRepositoryError>;

    async fn delete_message(&self, id: Uuid) -> Result<(), ContactRepositoryError>;
}
