pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod email;
pub mod experience;
pub mod profile;
pub mod project;
pub mod site_content;
pub mod skill;
