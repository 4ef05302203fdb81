mod get_dashboard_stats_service;

pub use get_dashboard_stats_service::GetDashboardStatsService;
