pub mod api;
pub mod db;
pub mod text;
pub mod validation;
