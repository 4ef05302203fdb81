pub mod contact_validation;
mod manage_contact_service;
mod submit_contact_service;

pub use manage_contact_service::ManageContactService;
pub use submit_contact_service::SubmitContactService;
