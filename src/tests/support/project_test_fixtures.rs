use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::modules::project::application::ports::outgoing::project_query::{
    PageRequest, PageResult, ProjectListFilter, ProjectQuery, ProjectQueryError,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    NewProject, ProjectChanges, ProjectFields, ProjectRepository, ProjectRepositoryError,
};

pub fn project_input(title: &str) -> ProjectInput {
    ProjectInput {
        title: title.to_string(),
        description: "Built for the portfolio".to_string(),
        technologies: "Rust, Actix Web".to_string(),
        ..Default::default()
    }
}

pub fn sample_project(title: &str, slug: &str) -> Project {
    let now = Utc::now();
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        slug: slug.to_string(),
        description: "Built for the portfolio".to_string(),
        detailed_description: None,
        image_url: None,
        github_link: Some("https://github.com/example/repo".to_string()),
        live_link: None,
        technologies: "Rust, Actix Web".to_string(),
        category: None,
        featured: false,
        order: 0,
        created: None,
        created_at: now,
        updated_at: now,
    }
}

fn apply_fields(project: &mut Project, fields: ProjectFields) {
    project.title = fields.title;
    project.description = fields.description;
    project.detailed_description = fields.detailed_description;
    project.image_url = fields.image_url;
    project.github_link = fields.github_link;
    project.live_link = fields.live_link;
    project.technologies = fields.technologies;
    project.category = fields.category;
    project.featured = fields.featured;
    project.order = fields.order;
    project.created = fields.created;
    project.updated_at = Utc::now();
}

/// Vec-backed fake that honours the slug and ordering rules of the real adapters.
#[derive(Clone, Default)]
pub struct InMemoryProjects {
    rows: Arc<Mutex<Vec<Project>>>,
    failure: Option<String>,
}

impl InMemoryProjects {
    pub fn failing(message: &str) -> Self {
        Self {
            rows: Arc::default(),
            failure: Some(message.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: Uuid) -> Option<Project> {
        self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned()
    }

    pub fn insert(&self, title: &str, slug: &str) -> Project {
        self.insert_with(title, slug, |_| {})
    }

    pub fn insert_with(&self, title: &str, slug: &str, edit: impl FnOnce(&mut Project)) -> Project {
        let mut project = sample_project(title, slug);
        edit(&mut project);
        self.rows.lock().unwrap().push(project.clone());
        project
    }

    fn check_failure(&self) -> Result<(), String> {
        match &self.failure {
            Some(msg) => Err(msg.clone()),
            None => Ok(()),
        }
    }

    fn sorted(&self) -> Vec<Project> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            a.order
                .cmp(&b.order)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        rows
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjects {
    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError> {
        self.check_failure()
            .map_err(ProjectRepositoryError::DatabaseError)?;

        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|p| p.slug.eq_ignore_ascii_case(&data.slug)) {
            return Err(ProjectRepositoryError::SlugAlreadyExists);
        }

        let mut project = sample_project(&data.fields.title, &data.slug);
        apply_fields(&mut project, data.fields);
        rows.push(project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        project_id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Project, ProjectRepositoryError> {
        self.check_failure()
            .map_err(ProjectRepositoryError::DatabaseError)?;

        let mut rows = self.rows.lock().unwrap();
        if let Some(slug) = &changes.slug {
            let taken = rows
                .iter()
                .any(|p| p.id != project_id && p.slug.eq_ignore_ascii_case(slug));
            if taken {
                return Err(ProjectRepositoryError::SlugAlreadyExists);
            }
        }

        let project = rows
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        if let Some(slug) = changes.slug {
            project.slug = slug;
        }
        apply_fields(project, changes.fields);
        Ok(project.clone())
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        self.check_failure()
            .map_err(ProjectRepositoryError::DatabaseError)?;

        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != project_id);
        if rows.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjects {
    async fn get_by_id(&self, project_id: Uuid) -> Result<Project, ProjectQueryError> {
        self.check_failure().map_err(ProjectQueryError::DatabaseError)?;
        self.get(project_id).ok_or(ProjectQueryError::NotFound)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Project, ProjectQueryError> {
        self.check_failure().map_err(ProjectQueryError::DatabaseError)?;
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug.eq_ignore_ascii_case(slug))
            .cloned()
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn list(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Project>, ProjectQueryError> {
        self.check_failure().map_err(ProjectQueryError::DatabaseError)?;

        let matching: Vec<Project> = self
            .sorted()
            .into_iter()
            .filter(|p| match &filter.category {
                Some(category) => p.category.as_deref() == Some(category.as_str()),
                None => true,
            })
            .filter(|p| filter.featured.map_or(true, |f| p.featured == f))
            .collect();

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn featured(&self) -> Result<Vec<Project>, ProjectQueryError> {
        self.check_failure().map_err(ProjectQueryError::DatabaseError)?;
        Ok(self.sorted().into_iter().filter(|p| p.featured).collect())
    }

    async fn categories(&self) -> Result<Vec<String>, ProjectQueryError> {
        self.check_failure().map_err(ProjectQueryError::DatabaseError)?;

        let mut categories: Vec<String> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter_map(|p| p.category.clone())
            .filter(|c| !c.is_empty())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}
