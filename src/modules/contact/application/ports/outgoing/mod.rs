pub mod contact_notifier;
pub mod contact_query;
pub mod contact_repository;

pub use contact_notifier::{ContactNotifier, ContactNotifierError};
pub use contact_query::{ContactQuery, ContactQueryError};
pub use contact_repository::{ContactRepository, ContactRepositoryError, NewContactMessage};
