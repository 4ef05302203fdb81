#![allow(dead_code)]

use std::sync::Arc;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, EntityTrait, Schema,
};
use uuid::Uuid;

use portfolio_backend::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use portfolio_backend::auth::adapter::outgoing::security::Argon2Hasher;
use portfolio_backend::auth::adapter::outgoing::UserQueryPostgres;
use portfolio_backend::auth::application::auth_use_cases::AuthUseCases;
use portfolio_backend::auth::application::service::LoginUserService;
use portfolio_backend::contact::adapter::outgoing::{
    ContactQueryPostgres, ContactRepositoryPostgres,
};
use portfolio_backend::contact::application::contact_use_cases::ContactUseCases;
use portfolio_backend::contact::application::service::{
    ManageContactService, SubmitContactService,
};
use portfolio_backend::dashboard::adapter::outgoing::DashboardQueryPostgres;
use portfolio_backend::dashboard::application::service::GetDashboardStatsService;
use portfolio_backend::email::adapter::outgoing::LogEmailSender;
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
use portfolio_backend::site_content::adapter::outgoing::{
    AboutContentRepository, HomeContentRepository,
};
use portfolio_backend::site_content::application::site_content_use_cases::{
    ContentUseCases, SiteContentUseCases,
};
use portfolio_backend::skill::adapter::outgoing::{SkillQueryPostgres, SkillRepositoryPostgres};
use portfolio_backend::skill::application::service::{ListSkillsService, ManageSkillService};
use portfolio_backend::skill::application::skill_use_cases::SkillUseCases;
use portfolio_backend::AppState;
use portfolio_backend::auth::adapter::outgoing::sea_orm_entity::users;
use portfolio_backend::auth::application::ports::outgoing::token_provider::TokenProvider;
use portfolio_backend::contact::adapter::outgoing::sea_orm_entity::contact_messages;
use portfolio_backend::experience::adapter::outgoing::sea_orm_entity::work_experiences;
use portfolio_backend::profile::adapter::outgoing::sea_orm_entity::profiles;
use portfolio_backend::project::adapter::outgoing::sea_orm_entity::projects;
use portfolio_backend::site_content::adapter::outgoing::sea_orm_entity::{
    about_contents, home_contents,
};
use portfolio_backend::skill::adapter::outgoing::sea_orm_entity::skills;

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) {
    let schema = Schema::new(DbBackend::Sqlite);
    let stmt = schema.create_table_from_entity(entity);
    db.execute(db.get_database_backend().build(&stmt))
        .await
        .expect("create table");
}

/// Fresh in-memory SQLite database with every table plus the unique indexes
/// the Postgres migrations define.
pub async fn sqlite_db() -> Arc<DatabaseConnection> {
    // One connection, or each pooled connection would see its own database.
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("sqlite connects");

    create_table(&db, users::Entity).await;
    create_table(&db, projects::Entity).await;
    create_table(&db, work_experiences::Entity).await;
    create_table(&db, skills::Entity).await;
    create_table(&db, profiles::Entity).await;
    create_table(&db, contact_messages::Entity).await;
    create_table(&db, home_contents::Entity).await;
    create_table(&db, about_contents::Entity).await;

    for sql in [
        "CREATE UNIQUE INDEX idx_projects_slug_unique ON projects (lower(slug))",
        "CREATE UNIQUE INDEX idx_home_contents_single_active ON home_contents (is_active) WHERE is_active",
        "CREATE UNIQUE INDEX idx_about_contents_single_active ON about_contents (is_active) WHERE is_active",
    ] {
        db.execute_unprepared(sql).await.expect("create index");
    }

    Arc::new(db)
}

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "integration_secret_key_with_32_chars!!".to_string(),
        issuer: "portfolio-it".to_string(),
        access_token_expiry: 600,
    })
}

pub fn bearer(is_superuser: bool) -> String {
    let token = jwt_service()
        .generate_access_token(Uuid::new_v4(), is_superuser)
        .expect("token");
    format!("Bearer {token}")
}

/// Production wiring over the given database, with notifications sent to
/// the log.
pub fn app_state(db: Arc<DatabaseConnection>) -> AppState {
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db));
    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db));
    let profile_service = Arc::new(ProfileService::new(ProfileRepositoryPostgres::new(
        Arc::clone(&db),
    )));

    AppState {
        auth: AuthUseCases {
            login: Arc::new(LoginUserService::new(
                UserQueryPostgres::new(Arc::clone(&db)),
                Arc::new(Argon2Hasher::default()),
                Arc::new(jwt_service()),
            )),
        },
        project: ProjectUseCases {
            create: Arc::new(CreateProjectService::new(project_repo.clone())),
            update: Arc::new(UpdateProjectService::new(project_repo.clone())),
            delete: Arc::new(DeleteProjectService::new(project_repo)),
            get: Arc::new(GetProjectService::new(project_query.clone())),
            list: Arc::new(ListProjectsService::new(project_query)),
        },
        experience: ExperienceUseCases {
            list: Arc::new(ListExperiencesService::new(ExperienceQueryPostgres::new(
                Arc::clone(&db),
            ))),
            manage: Arc::new(ManageExperienceService::new(
                ExperienceRepositoryPostgres::new(Arc::clone(&db)),
            )),
        },
        skill: SkillUseCases {
            list: Arc::new(ListSkillsService::new(SkillQueryPostgres::new(
                Arc::clone(&db),
            ))),
            manage: Arc::new(ManageSkillService::new(SkillRepositoryPostgres::new(
                Arc::clone(&db),
            ))),
        },
        site_content: SiteContentUseCases {
            home: ContentUseCases::over(HomeContentRepository::new(Arc::clone(&db))),
            about: ContentUseCases::over(AboutContentRepository::new(Arc::clone(&db))),
        },
        contact: ContactUseCases {
            submit: Arc::new(SubmitContactService::new(
                contact_repo.clone(),
                Arc::new(ContactEmailService::new(Arc::new(LogEmailSender), None)),
            )),
            manage: Arc::new(ManageContactService::new(
                contact_repo,
                ContactQueryPostgres::new(Arc::clone(&db)),
            )),
        },
        profile: ProfileUseCases {
            public: profile_service.clone(),
            manage: profile_service,
        },
        dashboard: Arc::new(GetDashboardStatsService::new(DashboardQueryPostgres::new(
            db,
        ))),
    }
}

/// The token provider as the request extractor looks it up.
pub fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(jwt_service())
}
