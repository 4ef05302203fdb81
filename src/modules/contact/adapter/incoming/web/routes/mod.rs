pub mod dto;
mod manage_contact;
mod submit_contact;

pub use manage_contact::{
    __path_delete_contact_message_handler, __path_get_contact_message_handler,
    __path_list_contact_messages_handler, __path_mark_read_handler, __path_mark_resolved_handler,
    __path_mark_unread_handler, __path_mark_unresolved_handler, delete_contact_message_handler,
    get_contact_message_handler, list_contact_messages_handler, mark_read_handler,
    mark_resolved_handler, mark_unread_handler, mark_unresolved_handler,
};
pub use submit_contact::{__path_submit_contact_handler, submit_contact_handler};
