pub mod domain;
pub mod experience_use_cases;
pub mod ports;
pub mod service;
