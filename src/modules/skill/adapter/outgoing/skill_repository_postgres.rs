use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{self, ActiveModel, Entity};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::{
    SkillFields, SkillRepository, SkillRepositoryError,
};

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn create_skill(&self, fields: SkillFields) -> Result<Skill, SkillRepositoryError> {
        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            ..Default::default()
        };
        apply_fields(&mut model, fields);

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_skill(inserted))
    }

    async fn update_skill(
        &self,
        id: Uuid,
        fields: SkillFields,
    ) -> Result<Skill, SkillRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SkillRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        apply_fields(&mut model, fields);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_skill(updated))
    }

    async fn delete_skill(&self, id: Uuid) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn apply_fields(model: &mut ActiveModel, f: SkillFields) {
    model.name = Set(f.name);
    model.category = Set(f.category.into());
    model.proficiency_level = Set(f.proficiency_level);
    model.icon = Set(f.icon);
    model.is_visible = Set(f.is_visible);
    model.display_order = Set(f.order);
}

pub(crate) fn model_to_skill(m: skills::Model) -> Skill {
    Skill {
        id: m.id,
        name: m.name,
        category: m.category.into(),
        proficiency_level: m.proficiency_level,
        icon: m.icon,
        is_visible: m.is_visible,
        order: m.display_order,
        created_at: m.created_at.into(),
        updated_at: m.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}
