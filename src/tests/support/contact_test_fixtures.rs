use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    ContactFilter, ContactMessage, ContactSubmission, MessageFlag,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactNotifier, ContactNotifierError, ContactQuery, ContactQueryError, ContactRepository,
    ContactRepositoryError, NewContactMessage,
};

pub fn submission(name: &str) -> ContactSubmission {
    ContactSubmission {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        subject: "Hello".to_string(),
        message: "I liked your portfolio.".to_string(),
    }
}

fn sample(name: &str) -> ContactMessage {
    let now = Utc::now();
    ContactMessage {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        subject: "Hello".to_string(),
        message: "Hi there".to_string(),
        is_read: false,
        is_resolved: false,
        ip_address: None,
        user_agent: None,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct InMemoryContacts {
    rows: Arc<Mutex<Vec<ContactMessage>>>,
    failure: Option<String>,
}

impl InMemoryContacts {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: Uuid) -> Option<ContactMessage> {
        self.rows.lock().unwrap().iter().find(|m| m.id == id).cloned()
    }

    /// Each insert is stamped one second after the previous one.
    pub fn insert_with(&self, name: &str, edit: impl FnOnce(&mut ContactMessage)) -> ContactMessage {
        let mut rows = self.rows.lock().unwrap();
        let mut row = sample(name);
        row.created_at = row.created_at + Duration::seconds(rows.len() as i64);
        edit(&mut row);
        rows.push(row.clone());
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
impl ContactRepository for InMemoryContacts {
    async fn create_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        self.check().map_err(ContactRepositoryError::DatabaseError)?;
        Ok(self.insert_with(&message.name, |row| {
            row.email = message.email;
            row.subject = message.subject;
            row.message = message.message;
            row.ip_address = message.client.ip_address;
            row.user_agent = message.client.user_agent;
        }))
    }

    async fn set_flag(
        &self,
        id: Uuid,
        flag: MessageFlag,
        value: bool,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        self.check().map_err(ContactRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ContactRepositoryError::NotFound)?;
        match flag {
            MessageFlag::Read => row.is_read = value,
            MessageFlag::Resolved => row.is_resolved = value,
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete_message(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        self.check().map_err(ContactRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        if rows.len() == before {
            return Err(ContactRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ContactQuery for InMemoryContacts {
    async fn list(&self, filter: ContactFilter) -> Result<Vec<ContactMessage>, ContactQueryError> {
        self.check().map_err(ContactQueryError::DatabaseError)?;
        let mut rows: Vec<ContactMessage> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<ContactMessage>, ContactQueryError> {
        self.check().map_err(ContactQueryError::DatabaseError)?;
        Ok(self.get(id))
    }
}

/// Notifier double that remembers which messages it was handed.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notified: Arc<Mutex<Vec<Uuid>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn notified(&self) -> Vec<Uuid> {
        self.notified.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactNotifier for RecordingNotifier {
    async fn notify(&self, message: &ContactMessage) -> Result<(), ContactNotifierError> {
        if self.fail {
            return Err(ContactNotifierError("smtp unreachable".to_string()));
        }
        self.notified.lock().unwrap().push(message.id);
        Ok(())
    }
}
