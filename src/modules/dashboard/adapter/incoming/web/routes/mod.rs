mod dashboard;

pub use dashboard::{__path_dashboard_handler, dashboard_handler};
