use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::work_experiences::{
    self, ActiveModel, Entity,
};
use crate::modules::experience::application::domain::entities::WorkExperience;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceFields, ExperienceRepository, ExperienceRepositoryError,
};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn create_experience(
        &self,
        fields: ExperienceFields,
    ) -> Result<WorkExperience, ExperienceRepositoryError> {
        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            ..Default::default()
        };
        apply_fields(&mut model, fields);

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_experience(inserted))
    }

    async fn update_experience(
        &self,
        id: Uuid,
        fields: ExperienceFields,
    ) -> Result<WorkExperience, ExperienceRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ExperienceRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        apply_fields(&mut model, fields);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_experience(updated))
    }

    async fn delete_experience(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn apply_fields(model: &mut ActiveModel, f: ExperienceFields) {
    model.company = Set(f.company);
    model.position = Set(f.position);
    model.location = Set(f.location);
    model.description = Set(f.description);
    model.start_date = Set(f.start_date);
    model.end_date = Set(f.end_date);
    model.is_current = Set(f.is_current);
    model.company_logo_url = Set(f.company_logo_url);
    model.technologies = Set(f.technologies);
    model.display_order = Set(f.order);
    model.is_visible = Set(f.is_visible);
}

pub(crate) fn model_to_experience(m: work_experiences::Model) -> WorkExperience {
    WorkExperience {
        id: m.id,
        company: m.company,
        position: m.position,
        location: m.location,
        description: m.description,
        start_date: m.start_date,
        end_date: m.end_date,
        is_current: m.is_current,
        company_logo_url: m.company_logo_url,
        technologies: m.technologies,
        order: m.display_order,
        is_visible: m.is_visible,
        created_at: m.created_at.into(),
        updated_at: m.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}
