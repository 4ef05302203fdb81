use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes as auth_routes;
use crate::contact::adapter::incoming::web::routes as contact_routes;
use crate::dashboard::adapter::incoming::web::routes as dashboard_routes;
use crate::experience::adapter::incoming::web::routes as experience_routes;
use crate::profile::adapter::incoming::web::routes as profile_routes;
use crate::project::adapter::incoming::web::routes as project_routes;
use crate::site_content::adapter::incoming::web::routes as content_routes;
use crate::skill::adapter::incoming::web::routes as skill_routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Content API",
        version = "1.0.0",
        description = "Public portfolio reads and the administrator content contract"
    ),
    paths(
        // Auth
        auth_routes::login_user_handler,

        // Projects
        project_routes::list_projects_handler,
        project_routes::featured_projects_handler,
        project_routes::project_categories_handler,
        project_routes::get_project_handler,
        project_routes::get_project_by_slug_handler,
        project_routes::create_project_handler,
        project_routes::update_project_handler,
        project_routes::delete_project_handler,

        // Experiences
        experience_routes::list_experiences_handler,
        experience_routes::list_all_experiences_handler,
        experience_routes::create_experience_handler,
        experience_routes::update_experience_handler,
        experience_routes::delete_experience_handler,

        // Skills
        skill_routes::list_skills_handler,
        skill_routes::list_all_skills_handler,
        skill_routes::create_skill_handler,
        skill_routes::update_skill_handler,
        skill_routes::delete_skill_handler,

        // Site content
        content_routes::get_home_content_handler,
        content_routes::update_home_content_handler,
        content_routes::list_home_content_handler,
        content_routes::create_home_content_handler,
        content_routes::activate_home_content_handler,
        content_routes::delete_home_content_handler,
        content_routes::get_about_content_handler,
        content_routes::update_about_content_handler,
        content_routes::list_about_content_handler,
        content_routes::create_about_content_handler,
        content_routes::activate_about_content_handler,
        content_routes::delete_about_content_handler,

        // Contact
        contact_routes::submit_contact_handler,
        contact_routes::list_contact_messages_handler,
        contact_routes::get_contact_message_handler,
        contact_routes::mark_read_handler,
        contact_routes::mark_unread_handler,
        contact_routes::mark_resolved_handler,
        contact_routes::mark_unresolved_handler,
        contact_routes::delete_contact_message_handler,

        // Profile
        profile_routes::get_public_profile_handler,
        profile_routes::get_own_profile_handler,
        profile_routes::upsert_own_profile_handler,

        // Dashboard
        dashboard_routes::dashboard_handler,
    ),
    components(schemas(ErrorResponse, ErrorDetail)),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Administrator login"),
        (name = "projects", description = "Portfolio projects"),
        (name = "experiences", description = "Work history"),
        (name = "skills", description = "Skills and proficiency"),
        (name = "content", description = "Home and about page content"),
        (name = "contact", description = "Contact form and inbox"),
        (name = "profile", description = "Owner profile"),
        (name = "dashboard", description = "Administrator overview"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Administrator access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
