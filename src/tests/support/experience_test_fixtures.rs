use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{ExperienceInput, WorkExperience};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceFields, ExperienceQuery, ExperienceQueryError, ExperienceRepository,
    ExperienceRepositoryError, Visibility,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn experience_input(company: &str) -> ExperienceInput {
    ExperienceInput {
        company: company.to_string(),
        position: "Engineer".to_string(),
        start_date: Some(date(2022, 1, 1)),
        technologies: Some("Rust, SQL".to_string()),
        ..Default::default()
    }
}

fn sample(company: &str) -> WorkExperience {
    let now = Utc::now();
    WorkExperience {
        id: Uuid::new_v4(),
        company: company.to_string(),
        position: "Engineer".to_string(),
        location: None,
        description: None,
        start_date: date(2022, 1, 1),
        end_date: None,
        is_current: false,
        company_logo_url: None,
        technologies: None,
        order: 0,
        is_visible: true,
        created_at: now,
        updated_at: now,
    }
}

fn apply(row: &mut WorkExperience, f: ExperienceFields) {
    row.company = f.company;
    row.position = f.position;
    row.location = f.location;
    row.description = f.description;
    row.start_date = f.start_date;
    row.end_date = f.end_date;
    row.is_current = f.is_current;
    row.company_logo_url = f.company_logo_url;
    row.technologies = f.technologies;
    row.order = f.order;
    row.is_visible = f.is_visible;
    row.updated_at = Utc::now();
}

#[derive(Clone, Default)]
pub struct InMemoryExperiences {
    rows: Arc<Mutex<Vec<WorkExperience>>>,
    failure: Option<String>,
}

impl InMemoryExperiences {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn insert_with(&self, company: &str, edit: impl FnOnce(&mut WorkExperience)) -> WorkExperience {
        let mut row = sample(company);
        edit(&mut row);
        self.rows.lock().unwrap().push(row.clone());
        row
    }

    fn check(&self) -> Result<(), String> {
        match &self.failure {
            Some(msg) => Err(msg.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ExperienceRepository for InMemoryExperiences {
    async fn create_experience(
        &self,
        fields: ExperienceFields,
    ) -> Result<WorkExperience, ExperienceRepositoryError> {
        self.check().map_err(ExperienceRepositoryError::DatabaseError)?;
        let mut row = sample(&fields.company);
        apply(&mut row, fields);
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_experience(
        &self,
        id: Uuid,
        fields: ExperienceFields,
    ) -> Result<WorkExperience, ExperienceRepositoryError> {
        self.check().map_err(ExperienceRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ExperienceRepositoryError::NotFound)?;
        apply(row, fields);
        Ok(row.clone())
    }

    async fn delete_experience(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        self.check().map_err(ExperienceRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ExperienceQuery for InMemoryExperiences {
    async fn list(
        &self,
        visibility: Visibility,
    ) -> Result<Vec<WorkExperience>, ExperienceQueryError> {
        self.check().map_err(ExperienceQueryError::DatabaseError)?;
        let mut rows: Vec<WorkExperience> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| visibility == Visibility::All || r.is_visible)
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            b.is_current
                .cmp(&a.is_current)
                .then_with(|| b.start_date.cmp(&a.start_date))
                .then_with(|| a.order.cmp(&b.order))
        });
        Ok(rows)
    }
}
