use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::email::application::ports::outgoing::EmailSender;
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::outgoing::{ContactNotifier, ContactNotifierError};

pub fn acknowledgement_subject(message: &ContactMessage) -> String {
    format!("Thank you for contacting us, {}!", message.name)
}

fn acknowledgement_body(message: &ContactMessage) -> String {
    format!(
        "Hi {},\n\nThank you for reaching out. We have received your message regarding '{}' and will get back to you soon.\n\nBest regards,\nThe Team",
        message.name, message.subject
    )
}

pub fn owner_subject(message: &ContactMessage) -> String {
    format!("New Contact Form Submission: {}", message.subject)
}

fn owner_body(message: &ContactMessage) -> String {
    format!(
        "New message from {} ({}):\n\n{}",
        message.name, message.email, message.message
    )
}

/// Sends the sender an acknowledgement and, when an owner address is
/// configured, forwards a copy of the submission there.
#[derive(Clone)]
pub struct ContactEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    owner_email: Option<String>,
}

impl fmt::Debug for ContactEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("owner_email", &self.owner_email)
            .finish()
    }
}

impl ContactEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, owner_email: Option<String>) -> Self {
        Self {
            sender,
            owner_email: owner_email.filter(|e| !e.trim().is_empty()),
        }
    }
}

#[async_trait]
impl ContactNotifier for ContactEmailService {
    async fn notify(&self, message: &ContactMessage) -> Result<(), ContactNotifierError> {
        self.sender
            .send_email(
                &message.email,
                &acknowledgement_subject(message),
                &acknowledgement_body(message),
            )
            .await
            .map_err(|e| ContactNotifierError(e.to_string()))?;

        if let Some(owner) = &self.owner_email {
            self.sender
                .send_email(owner, &owner_subject(message), &owner_body(message))
                .await
                .map_err(|e| ContactNotifierError(e.to_string()))?;
        }

        info!(message_id = %message.id, "Contact notification sent");
        Ok(())
    }
}
