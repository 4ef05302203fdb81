use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::LoginUserUseCase;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::outgoing::ContactNotifier;
use crate::contact::application::service::{ManageContactService, SubmitContactService};
use crate::dashboard::application::service::GetDashboardStatsService;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::service::{ListExperiencesService, ManageExperienceService};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::ProfileService;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectService, ListProjectsService,
    UpdateProjectService,
};
use crate::site_content::application::domain::entities::{AboutFields, HomeFields};
use crate::site_content::application::site_content_use_cases::{
    ContentUseCases, SiteContentUseCases,
};
use crate::skill::application::service::{ListSkillsService, ManageSkillService};
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::tests::support::contact_test_fixtures::{InMemoryContacts, RecordingNotifier};
use crate::tests::support::content_test_fixtures::InMemoryContent;
use crate::tests::support::experience_test_fixtures::InMemoryExperiences;
use crate::tests::support::profile_test_fixtures::InMemoryProfiles;
use crate::tests::support::project_test_fixtures::InMemoryProjects;
use crate::tests::support::skill_test_fixtures::InMemorySkills;
use crate::tests::support::stubs::{EmptyDashboardQuery, StubLoginUserUseCase};
use crate::AppState;

/// Real services over in-memory stores. Each `with_*` swaps one store so a
/// test can seed it and inspect it after the request.
pub struct TestAppStateBuilder {
    login_user: Arc<dyn LoginUserUseCase + Send + Sync>,
    projects: InMemoryProjects,
    home: InMemoryContent<HomeFields>,
    about: InMemoryContent<AboutFields>,
    experiences: InMemoryExperiences,
    skills: InMemorySkills,
    contacts: InMemoryContacts,
    notifier: Arc<dyn ContactNotifier + Send + Sync>,
    profiles: InMemoryProfiles,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_user: Arc::new(StubLoginUserUseCase),
            projects: InMemoryProjects::default(),
            home: InMemoryContent::default(),
            about: InMemoryContent::default(),
            experiences: InMemoryExperiences::default(),
            skills: InMemorySkills::default(),
            contacts: InMemoryContacts::default(),
            notifier: Arc::new(RecordingNotifier::default()),
            profiles: InMemoryProfiles::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_projects(mut self, repo: InMemoryProjects) -> Self {
        self.projects = repo;
        self
    }

    pub fn with_home_content(mut self, repo: InMemoryContent<HomeFields>) -> Self {
        self.home = repo;
        self
    }

    pub fn with_about_content(mut self, repo: InMemoryContent<AboutFields>) -> Self {
        self.about = repo;
        self
    }

    pub fn with_experiences(mut self, repo: InMemoryExperiences) -> Self {
        self.experiences = repo;
        self
    }

    pub fn with_skills(mut self, repo: InMemorySkills) -> Self {
        self.skills = repo;
        self
    }

    pub fn with_contacts(
        mut self,
        repo: InMemoryContacts,
        notifier: Arc<dyn ContactNotifier + Send + Sync>,
    ) -> Self {
        self.contacts = repo;
        self.notifier = notifier;
        self
    }

    pub fn with_profiles(mut self, repo: InMemoryProfiles) -> Self {
        self.profiles = repo;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let projects = self.projects;
        let profile_service = Arc::new(ProfileService::new(self.profiles));

        web::Data::new(AppState {
            auth: AuthUseCases {
                login: self.login_user,
            },
            project: ProjectUseCases {
                create: Arc::new(CreateProjectService::new(projects.clone())),
                update: Arc::new(UpdateProjectService::new(projects.clone())),
                delete: Arc::new(DeleteProjectService::new(projects.clone())),
                get: Arc::new(GetProjectService::new(projects.clone())),
                list: Arc::new(ListProjectsService::new(projects)),
            },
            experience: ExperienceUseCases {
                list: Arc::new(ListExperiencesService::new(self.experiences.clone())),
                manage: Arc::new(ManageExperienceService::new(self.experiences)),
            },
            skill: SkillUseCases {
                list: Arc::new(ListSkillsService::new(self.skills.clone())),
                manage: Arc::new(ManageSkillService::new(self.skills)),
            },
            site_content: SiteContentUseCases {
                home: ContentUseCases::over(self.home),
                about: ContentUseCases::over(self.about),
            },
            contact: ContactUseCases {
                submit: Arc::new(SubmitContactService::new(
                    self.contacts.clone(),
                    self.notifier,
                )),
                manage: Arc::new(ManageContactService::new(
                    self.contacts.clone(),
                    self.contacts,
                )),
            },
            profile: ProfileUseCases {
                public: profile_service.clone(),
                manage: profile_service,
            },
            dashboard: Arc::new(GetDashboardStatsService::new(EmptyDashboardQuery)),
        })
    }
}
