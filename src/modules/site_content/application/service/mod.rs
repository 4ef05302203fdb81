mod get_active_content_service;
mod manage_content_service;

pub use get_active_content_service::GetActiveContentService;
pub use manage_content_service::{ManageContentService, ACTIVE_ROW_PROTECTED};
