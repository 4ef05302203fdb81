pub mod email_sender;

pub use email_sender::{EmailSendError, EmailSender};
