use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{
    Skill, SkillCategory, SkillInput, DEFAULT_PROFICIENCY,
};
use crate::modules::skill::application::ports::outgoing::{
    SkillFields, SkillQuery, SkillQueryError, SkillRepository, SkillRepositoryError, Visibility,
};

pub fn skill_input(name: &str) -> SkillInput {
    SkillInput {
        name: name.to_string(),
        ..Default::default()
    }
}

fn sample(name: &str) -> Skill {
    let now = Utc::now();
    Skill {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: SkillCategory::Programming,
        proficiency_level: DEFAULT_PROFICIENCY,
        icon: None,
        is_visible: true,
        order: 0,
        created_at: now,
        updated_at: now,
    }
}

fn apply(row: &mut Skill, f: SkillFields) {
    row.name = f.name;
    row.category = f.category;
    row.proficiency_level = f.proficiency_level;
    row.icon = f.icon;
    row.is_visible = f.is_visible;
    row.order = f.order;
    row.updated_at = Utc::now();
}

#[derive(Clone, Default)]
pub struct InMemorySkills {
    rows: Arc<Mutex<Vec<Skill>>>,
    failure: Option<String>,
}

impl InMemorySkills {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn insert_with(&self, name: &str, edit: impl FnOnce(&mut Skill)) -> Skill {
        let mut row = sample(name);
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
impl SkillRepository for InMemorySkills {
    async fn create_skill(&self, fields: SkillFields) -> Result<Skill, SkillRepositoryError> {
        self.check().map_err(SkillRepositoryError::DatabaseError)?;
        let mut row = sample(&fields.name);
        apply(&mut row, fields);
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_skill(
        &self,
        id: Uuid,
        fields: SkillFields,
    ) -> Result<Skill, SkillRepositoryError> {
        self.check().map_err(SkillRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(SkillRepositoryError::NotFound)?;
        apply(row, fields);
        Ok(row.clone())
    }

    async fn delete_skill(&self, id: Uuid) -> Result<(), SkillRepositoryError> {
        self.check().map_err(SkillRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(SkillRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl SkillQuery for InMemorySkills {
    async fn list(&self, visibility: Visibility) -> Result<Vec<Skill>, SkillQueryError> {
        self.check().map_err(SkillQueryError::DatabaseError)?;
        let mut rows: Vec<Skill> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| visibility == Visibility::All || r.is_visible)
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            a.category
                .as_str()
                .cmp(b.category.as_str())
                .then_with(|| a.order.cmp(&b.order))
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(rows)
    }
}
