mod dashboard_query_postgres;

pub use dashboard_query_postgres::DashboardQueryPostgres;
