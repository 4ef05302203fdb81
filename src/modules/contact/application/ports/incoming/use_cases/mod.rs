mod manage_contact;
mod submit_contact;

pub use manage_contact::{ManageContactError, ManageContactUseCase};
pub use submit_contact::{SubmitContactError, SubmitContactUseCase};
