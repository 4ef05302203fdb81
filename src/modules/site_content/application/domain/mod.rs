mod content_rules;
pub mod defaults;
pub mod entities;
