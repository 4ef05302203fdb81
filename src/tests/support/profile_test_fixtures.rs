use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::outgoing::{
    ProfileFields, ProfileRepository, ProfileRepositoryError,
};

fn sample(user_id: Uuid) -> Profile {
    let now = Utc::now();
    Profile {
        id: Uuid::new_v4(),
        user_id,
        bio: None,
        profile_picture_url: None,
        phone: None,
        address: None,
        skills: None,
        resume_url: None,
        created_at: now,
        updated_at: now,
    }
}

fn apply(row: &mut Profile, f: ProfileFields) {
    row.bio = f.bio;
    row.profile_picture_url = f.profile_picture_url;
    row.phone = f.phone;
    row.address = f.address;
    row.skills = f.skills;
    row.resume_url = f.resume_url;
    row.updated_at = Utc::now();
}

#[derive(Clone, Default)]
pub struct InMemoryProfiles {
    rows: Arc<Mutex<Vec<Profile>>>,
}

impl InMemoryProfiles {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Inserts a profile for a fresh user, stamped after every existing row.
    pub fn insert_with(&self, edit: impl FnOnce(&mut Profile)) -> Profile {
        let mut rows = self.rows.lock().unwrap();
        let mut row = sample(Uuid::new_v4());
        row.created_at = row.created_at + Duration::seconds(rows.len() as i64);
        edit(&mut row);
        rows.push(row.clone());
        row
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, ProfileRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn upsert(
        &self,
        user_id: Uuid,
        fields: ProfileFields,
    ) -> Result<Profile, ProfileRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|p| p.user_id == user_id) {
            apply(row, fields);
            return Ok(row.clone());
        }

        let mut row = sample(user_id);
        apply(&mut row, fields);
        rows.push(row.clone());
        Ok(row)
    }

    async fn first(&self) -> Result<Option<Profile>, ProfileRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .min_by_key(|p| p.created_at)
            .cloned())
    }
}
