use serde::Serialize;
use utoipa::ToSchema;

/// Headline numbers for the admin landing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_projects: u64,
    pub featured_projects: u64,
    pub total_experiences: u64,
    pub visible_experiences: u64,
    pub total_skills: u64,
    pub visible_skills: u64,
    pub total_messages: u64,
    pub unread_messages: u64,
}
