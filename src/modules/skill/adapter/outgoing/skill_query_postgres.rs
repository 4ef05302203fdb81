use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{Column, Entity};
use crate::modules::skill::adapter::outgoing::skill_repository_postgres::model_to_skill;
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError, Visibility};

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list(&self, visibility: Visibility) -> Result<Vec<Skill>, SkillQueryError> {
        let mut query = Entity::find();
        if visibility == Visibility::VisibleOnly {
            query = query.filter(Column::IsVisible.eq(true));
        }

        let rows = query
            .order_by_asc(Column::Category)
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(|e| SkillQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(model_to_skill).collect())
    }
}
