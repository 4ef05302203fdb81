use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::contact_repository_postgres::model_to_message;
use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages::{
    Column, Entity,
};
use crate::modules::contact::application::domain::entities::{ContactFilter, ContactMessage};
use crate::modules::contact::application::ports::outgoing::{ContactQuery, ContactQueryError};

#[derive(Clone)]
pub struct ContactQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> ContactQueryError {
    ContactQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ContactQuery for ContactQueryPostgres {
    async fn list(&self, filter: ContactFilter) -> Result<Vec<ContactMessage>, ContactQueryError> {
        let mut query = Entity::find();
        if let Some(is_read) = filter.is_read {
            query = query.filter(Column::IsRead.eq(is_read));
        }
        if let Some(is_resolved) = filter.is_resolved {
            query = query.filter(Column::IsResolved.eq(is_resolved));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_message).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<ContactMessage>, ContactQueryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(model_to_message))
    }
}
