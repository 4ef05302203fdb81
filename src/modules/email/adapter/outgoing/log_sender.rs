use async_trait::async_trait;
use tracing::info;

use crate::email::application::ports::outgoing::{EmailSendError, EmailSender};

/// Stand-in used when no SMTP server is configured: records the envelope in
/// the log and reports success.
#[derive(Debug, Clone, Default)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailSendError> {
        info!(to, subject, body_len = body.len(), "SMTP not configured; email not sent");
        Ok(())
    }
}
