pub mod about_contents;
pub mod home_contents;
