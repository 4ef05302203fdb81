pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{
    auth, contact, dashboard, email, experience, profile, project, site_content, skill,
};

#[cfg(test)]
mod tests;

use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::dashboard::application::ports::incoming::use_cases::GetDashboardStatsUseCase;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::site_content::application::site_content_use_cases::SiteContentUseCases;
use crate::skill::application::skill_use_cases::SkillUseCases;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub project: ProjectUseCases,
    pub experience: ExperienceUseCases,
    pub skill: SkillUseCases,
    pub site_content: SiteContentUseCases,
    pub contact: ContactUseCases,
    pub profile: ProfileUseCases,
    pub dashboard: Arc<dyn GetDashboardStatsUseCase + Send + Sync>,
}

/// Registers every API route.
///
/// Literal project paths go before `/api/projects/{id}` so they are not
/// captured by the id matcher.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::contact::adapter::incoming::web::routes as contact_routes;
    use crate::dashboard::adapter::incoming::web::routes as dashboard_routes;
    use crate::experience::adapter::incoming::web::routes as experience_routes;
    use crate::profile::adapter::incoming::web::routes as profile_routes;
    use crate::project::adapter::incoming::web::routes as project_routes;
    use crate::site_content::adapter::incoming::web::routes as content_routes;
    use crate::skill::adapter::incoming::web::routes as skill_routes;

    // Health
    cfg.service(health::health);
    cfg.service(health::readiness);

    // Auth
    cfg.service(auth_routes::login_user_handler);

    // Projects
    cfg.service(project_routes::featured_projects_handler);
    cfg.service(project_routes::project_categories_handler);
    cfg.service(project_routes::get_project_by_slug_handler);
    cfg.service(project_routes::list_projects_handler);
    cfg.service(project_routes::create_project_handler);
    cfg.service(project_routes::get_project_handler);
    cfg.service(project_routes::update_project_handler);
    cfg.service(project_routes::delete_project_handler);

    // Experiences
    cfg.service(experience_routes::list_experiences_handler);
    cfg.service(experience_routes::list_all_experiences_handler);
    cfg.service(experience_routes::create_experience_handler);
    cfg.service(experience_routes::update_experience_handler);
    cfg.service(experience_routes::delete_experience_handler);

    // Skills
    cfg.service(skill_routes::list_skills_handler);
    cfg.service(skill_routes::list_all_skills_handler);
    cfg.service(skill_routes::create_skill_handler);
    cfg.service(skill_routes::update_skill_handler);
    cfg.service(skill_routes::delete_skill_handler);

    // Site content
    cfg.service(content_routes::get_home_content_handler);
    cfg.service(content_routes::update_home_content_handler);
    cfg.service(content_routes::list_home_content_handler);
    cfg.service(content_routes::create_home_content_handler);
    cfg.service(content_routes::activate_home_content_handler);
    cfg.service(content_routes::delete_home_content_handler);
    cfg.service(content_routes::get_about_content_handler);
    cfg.service(content_routes::update_about_content_handler);
    cfg.service(content_routes::list_about_content_handler);
    cfg.service(content_routes::create_about_content_handler);
    cfg.service(content_routes::activate_about_content_handler);
    cfg.service(content_routes::delete_about_content_handler);

    // Contact
    cfg.service(contact_routes::submit_contact_handler);
    cfg.service(contact_routes::list_contact_messages_handler);
    cfg.service(contact_routes::get_contact_message_handler);
    cfg.service(contact_routes::mark_read_handler);
    cfg.service(contact_routes::mark_unread_handler);
    cfg.service(contact_routes::mark_resolved_handler);
    cfg.service(contact_routes::mark_unresolved_handler);
    cfg.service(contact_routes::delete_contact_message_handler);

    // Profile
    cfg.service(profile_routes::get_public_profile_handler);
    cfg.service(profile_routes::get_own_profile_handler);
    cfg.service(profile_routes::upsert_own_profile_handler);

    // Dashboard
    cfg.service(dashboard_routes::dashboard_handler);
}
