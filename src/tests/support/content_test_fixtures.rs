use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::site_content::application::domain::entities::{
    ContentDraft, ContentFields, ContentRecord,
};
use crate::modules::site_content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

/// Vec-backed singleton table with the same activation rules as the
/// database adapter.
#[derive(Clone)]
pub struct InMemoryContent<F: ContentFields> {
    rows: Arc<Mutex<Vec<ContentRecord<F>>>>,
    failure: Option<String>,
}

impl<F: ContentFields> Default for InMemoryContent<F> {
    fn default() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }
}

impl<F: ContentFields> InMemoryContent<F> {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn active_count(&self) -> usize {
        self.rows.lock().unwrap().iter().filter(|r| r.is_active).count()
    }

    pub fn get(&self, id: Uuid) -> Option<ContentRecord<F>> {
        self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned()
    }

    fn check(&self) -> Result<(), ContentRepositoryError> {
        match &self.failure {
            Some(msg) => Err(ContentRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<F: ContentFields> ContentRepository<F> for InMemoryContent<F> {
    async fn get_active(&self) -> Result<ContentRecord<F>, ContentRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if let Some(active) = rows.iter().find(|r| r.is_active) {
            return Ok(active.clone());
        }

        let now = Utc::now();
        let record = ContentRecord {
            id: Uuid::new_v4(),
            fields: F::defaults(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn find(&self, id: Uuid) -> Result<ContentRecord<F>, ContentRepositoryError> {
        self.check()?;
        self.get(id).ok_or(ContentRepositoryError::NotFound)
    }

    async fn list(&self) -> Result<Vec<ContentRecord<F>>, ContentRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.reverse();
        Ok(rows)
    }

    async fn save(&self, draft: ContentDraft<F>) -> Result<ContentRecord<F>, ContentRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();

        if draft.is_active {
            for row in rows.iter_mut().filter(|r| Some(r.id) != draft.id) {
                row.is_active = false;
            }
        }

        match draft.id {
            Some(id) => {
                let row = rows
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or(ContentRepositoryError::NotFound)?;
                row.fields = draft.fields;
                row.is_active = draft.is_active;
                row.updated_at = now;
                Ok(row.clone())
            }
            None => {
                let record = ContentRecord {
                    id: Uuid::new_v4(),
                    fields: draft.fields,
                    is_active: draft.is_active,
                    created_at: now,
                    updated_at: now,
                };
                rows.push(record.clone());
                Ok(record)
            }
        }
    }

    async fn activate(&self, id: Uuid) -> Result<ContentRecord<F>, ContentRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if !rows.iter().any(|r| r.id == id) {
            return Err(ContentRepositoryError::NotFound);
        }

        let mut activated = None;
        for row in rows.iter_mut() {
            row.is_active = row.id == id;
            if row.is_active {
                activated = Some(row.clone());
            }
        }
        activated.ok_or(ContentRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter()
            .find(|r| r.id == id)
            .ok_or(ContentRepositoryError::NotFound)?;
        if row.is_active {
            return Err(ContentRepositoryError::ActiveRow);
        }
        rows.retain(|r| r.id != id);
        Ok(())
    }
}
