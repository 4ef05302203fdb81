use std::env;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use portfolio_backend::api::openapi::ApiDoc;
use portfolio_backend::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use portfolio_backend::auth::adapter::outgoing::security::Argon2Hasher;
use portfolio_backend::auth::adapter::outgoing::UserQueryPostgres;
use portfolio_backend::auth::application::auth_use_cases::AuthUseCases;
use portfolio_backend::auth::application::ports::outgoing::token_provider::TokenProvider;
use portfolio_backend::auth::application::ports::outgoing::user_query::UserQuery;
use portfolio_backend::auth::application::service::LoginUserService;
use portfolio_backend::contact::adapter::outgoing::{
    ContactQueryPostgres, ContactRepositoryPostgres,
};
use portfolio_backend::contact::application::contact_use_cases::ContactUseCases;
use portfolio_backend::contact::application::ports::outgoing::ContactNotifier;
use portfolio_backend::contact::application::service::{
    ManageContactService, SubmitContactService,
};
use portfolio_backend::dashboard::adapter::outgoing::DashboardQueryPostgres;
use portfolio_backend::dashboard::application::service::GetDashboardStatsService;
use portfolio_backend::email::adapter::outgoing::{LogEmailSender, SmtpConfig, SmtpEmailSender};
use portfolio_backend::email::application::ports::outgoing::EmailSender;
use portfolio_backend::email::application::services::ContactEmailService;
use portfolio_backend::experience::adapter::outgoing::{
    ExperienceQueryPostgres, ExperienceRepositoryPostgres,
};
use portfolio_backend::experience::application::experience_use_cases::ExperienceUseCases;
use portfolio_backend::experience::application::service::{
    ListExperiencesService, ManageExperienceService,
};
use portfolio_backend::profile::adapter::outgoing::ProfileRepositoryPostgres;
use portfolio_backend::profile::application::profile_use_cases::ProfileUseCases;
use portfolio_backend::profile::application::service::ProfileService;
use portfolio_backend::project::adapter::outgoing::{
    ProjectQueryPostgres, ProjectRepositoryPostgres,
};
use portfolio_backend::project::application::project_use_cases::ProjectUseCases;
use portfolio_backend::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectService, ListProjectsService,
    UpdateProjectService,
};
use portfolio_backend::shared::api::{custom_json_config, custom_query_config};
use portfolio_backend::site_content::adapter::outgoing::{
    AboutContentRepository, HomeContentRepository,
};
use portfolio_backend::site_content::application::site_content_use_cases::{
    ContentUseCases, SiteContentUseCases,
};
use portfolio_backend::skill::adapter::outgoing::{SkillQueryPostgres, SkillRepositoryPostgres};
use portfolio_backend::skill::application::service::{ListSkillsService, ManageSkillService};
use portfolio_backend::skill::application::skill_use_cases::SkillUseCases;
use portfolio_backend::{init_routes, AppState};

#[cfg(not(tarpaulin_include))]
fn load_env() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

/// SMTP when configured, otherwise notifications only reach the log.
#[cfg(not(tarpaulin_include))]
fn contact_notifier() -> anyhow::Result<Arc<dyn ContactNotifier + Send + Sync>> {
    let sender: Arc<dyn EmailSender + Send + Sync> = match SmtpConfig::from_env() {
        Some(config) => {
            info!("Contact notifications go through SMTP at {}", config.server);
            Arc::new(SmtpEmailSender::new(&config).context("invalid SMTP configuration")?)
        }
        None => {
            warn!("SMTP is not configured, contact notifications are logged only");
            Arc::new(LogEmailSender)
        }
    };

    let owner_email = env::var("CONTACT_NOTIFY_EMAIL").ok();
    Ok(Arc::new(ContactEmailService::new(sender, owner_email)))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    load_env();
    info!("Starting application...");

    let db_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let host = env::var("HOST").context("HOST is not set")?;
    let port = env::var("PORT").context("PORT is not set")?;
    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Arc::new(
        Database::connect(opt)
            .await
            .context("failed to connect to database")?,
    );

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let login = LoginUserService::new(
        UserQueryPostgres::new(Arc::clone(&db)),
        Arc::new(Argon2Hasher::from_env()),
        Arc::clone(&token_provider),
    );
    // Admin tokens are re-checked against the account row on every request.
    let user_query: Arc<dyn UserQuery> = Arc::new(UserQueryPostgres::new(Arc::clone(&db)));

    // Projects
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db));
    let project = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(project_repo.clone())),
        update: Arc::new(UpdateProjectService::new(project_repo.clone())),
        delete: Arc::new(DeleteProjectService::new(project_repo)),
        get: Arc::new(GetProjectService::new(project_query.clone())),
        list: Arc::new(ListProjectsService::new(project_query)),
    };

    let experience = ExperienceUseCases {
        list: Arc::new(ListExperiencesService::new(ExperienceQueryPostgres::new(
            Arc::clone(&db),
        ))),
        manage: Arc::new(ManageExperienceService::new(
            ExperienceRepositoryPostgres::new(Arc::clone(&db)),
        )),
    };

    let skill = SkillUseCases {
        list: Arc::new(ListSkillsService::new(SkillQueryPostgres::new(Arc::clone(
            &db,
        )))),
        manage: Arc::new(ManageSkillService::new(SkillRepositoryPostgres::new(
            Arc::clone(&db),
        ))),
    };

    let site_content = SiteContentUseCases {
        home: ContentUseCases::over(HomeContentRepository::new(Arc::clone(&db))),
        about: ContentUseCases::over(AboutContentRepository::new(Arc::clone(&db))),
    };

    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db));
    let contact = ContactUseCases {
        submit: Arc::new(SubmitContactService::new(
            contact_repo.clone(),
            contact_notifier()?,
        )),
        manage: Arc::new(ManageContactService::new(
            contact_repo,
            ContactQueryPostgres::new(Arc::clone(&db)),
        )),
    };

    let profile_service = Arc::new(ProfileService::new(ProfileRepositoryPostgres::new(
        Arc::clone(&db),
    )));

    let state = AppState {
        auth: AuthUseCases {
            login: Arc::new(login),
        },
        project,
        experience,
        skill,
        site_content,
        contact,
        profile: ProfileUseCases {
            public: profile_service.clone(),
            manage: profile_service,
        },
        dashboard: Arc::new(GetDashboardStatsService::new(DashboardQueryPostgres::new(
            Arc::clone(&db),
        ))),
    };

    info!("Server listening on {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&user_query)))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}
