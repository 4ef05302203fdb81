mod log_sender;
mod smtp_sender;

pub use log_sender::LogEmailSender;
pub use smtp_sender::{Mailer, SmtpConfig, SmtpEmailSender};
