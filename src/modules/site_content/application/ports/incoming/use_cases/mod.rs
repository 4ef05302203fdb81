mod get_active_content;
mod manage_content;

pub use get_active_content::{GetActiveContentError, GetActiveContentUseCase};
pub use manage_content::{ManageContentError, ManageContentUseCase};
