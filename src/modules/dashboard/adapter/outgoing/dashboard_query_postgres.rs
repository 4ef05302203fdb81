use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages;
use crate::modules::dashboard::application::domain::entities::DashboardStats;
use crate::modules::dashboard::application::ports::outgoing::{
    DashboardQuery, DashboardQueryError,
};
use crate::modules::experience::adapter::outgoing::sea_orm_entity::work_experiences;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;

#[derive(Clone)]
pub struct DashboardQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DashboardQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn counts(&self) -> Result<DashboardStats, DbErr> {
        let db = &*self.db;

        Ok(DashboardStats {
            total_projects: projects::Entity::find().count(db).await?,
            featured_projects: projects::Entity::find()
                .filter(projects::Column::Featured.eq(true))
                .count(db)
                .await?,
            total_experiences: work_experiences::Entity::find().count(db).await?,
            visible_experiences: work_experiences::Entity::find()
                .filter(work_experiences::Column::IsVisible.eq(true))
                .count(db)
                .await?,
            total_skills: skills::Entity::find().count(db).await?,
            visible_skills: skills::Entity::find()
                .filter(skills::Column::IsVisible.eq(true))
                .count(db)
                .await?,
            total_messages: contact_messages::Entity::find().count(db).await?,
            unread_messages: contact_messages::Entity::find()
                .filter(contact_messages::Column::IsRead.eq(false))
                .count(db)
                .await?,
        })
    }
}

#[async_trait]
impl DashboardQuery for DashboardQueryPostgres {
    async fn stats(&self) -> Result<DashboardStats, DashboardQueryError> {
        self.counts()
            .await
            .map_err(|e| DashboardQueryError::DatabaseError(e.to_string()))
    }
}
