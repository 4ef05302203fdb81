use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages::{
    self, ActiveModel, Entity,
};
use crate::modules::contact::application::domain::entities::{ContactMessage, MessageFlag};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, NewContactMessage,
};

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(message.name),
            email: Set(message.email),
            subject: Set(message.subject),
            message: Set(message.message),
            is_read: Set(false),
            is_resolved: Set(false),
            ip_address: Set(message.client.ip_address),
            user_agent: Set(message.client.user_agent),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_message(inserted))
    }

    async fn set_flag(
        &self,
        id: Uuid,
        flag: MessageFlag,
        value: bool,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ContactRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        match flag {
            MessageFlag::Read => model.is_read = Set(value),
            MessageFlag::Resolved => model.is_resolved = Set(value),
        }

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_message(updated))
    }

    async fn delete_message(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }
        Ok(())
    }
}

pub(crate) fn model_to_message(m: contact_messages::Model) -> ContactMessage {
    ContactMessage {
        id: m.id,
        name: m.name,
        email: m.email,
        subject: m.subject,
        message: m.message,
        is_read: m.is_read,
        is_resolved: m.is_resolved,
        ip_address: m.ip_address,
        user_agent: m.user_agent,
        created_at: m.created_at.into(),
        updated_at: m.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
