pub mod request_context;

pub use request_context::access_denied;
