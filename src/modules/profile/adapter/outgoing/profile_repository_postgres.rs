use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::outgoing::{
    ProfileFields, ProfileRepository, ProfileRepositoryError,
};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, ProfileRepositoryError> {
        let row = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(model_to_profile))
    }

    async fn upsert(
        &self,
        user_id: Uuid,
        fields: ProfileFields,
    ) -> Result<Profile, ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        let saved = match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                apply_fields(&mut active, fields);
                active.update(&txn).await.map_err(map_db_err)?
            }
            None => {
                let mut active = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    ..Default::default()
                };
                apply_fields(&mut active, fields);
                active.insert(&txn).await.map_err(map_db_err)?
            }
        };

        txn.commit().await.map_err(map_db_err)?;
        Ok(model_to_profile(saved))
    }

    async fn first(&self) -> Result<Option<Profile>, ProfileRepositoryError> {
        let row = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(model_to_profile))
    }
}

fn apply_fields(model: &mut ActiveModel, f: ProfileFields) {
    model.bio = Set(f.bio);
    model.profile_picture_url = Set(f.profile_picture_url);
    model.phone = Set(f.phone);
    model.address = Set(f.address);
    model.skills = Set(f.skills);
    model.resume_url = Set(f.resume_url);
}

fn model_to_profile(m: profiles::Model) -> Profile {
    Profile {
        id: m.id,
        user_id: m.user_id,
        bio: m.bio,
        profile_picture_url: m.profile_picture_url,
        phone: m.phone,
        address: m.address,
        skills: m.skills,
        resume_url: m.resume_url,
        created_at: m.created_at.into(),
        updated_at: m.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn profile_model(user_id: Uuid, skills: Option<&str>) -> profiles::Model {
        let now = Utc::now().fixed_offset();
        profiles::Model {
            id: Uuid::new_v4(),
            user_id,
            bio: Some("Hello".to_string()),
            profile_picture_url: None,
            phone: None,
            address: None,
            skills: skills.map(str::to_string),
            resume_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn fields() -> ProfileFields {
        ProfileFields {
            bio: Some("Hello".to_string()),
            profile_picture_url: None,
            phone: None,
            address: None,
            skills: Some("Rust, SQL".to_string()),
            resume_url: None,
        }
    }

    #[tokio::test]
    async fn test_upsert_inserts_when_missing() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profiles::Model>::new()])
            .append_query_results(vec![vec![profile_model(user_id, Some("Rust, SQL"))]])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let saved = repo.upsert(user_id, fields()).await.unwrap();

        assert_eq!(saved.user_id, user_id);
        assert_eq!(saved.skills_list(), vec!["Rust", "SQL"]);
    }

    #[tokio::test]
    async fn test_upsert_updates_existing() {
        let user_id = Uuid::new_v4();
        let existing = profile_model(user_id, None);
        let mut after = existing.clone();
        after.skills = Some("Rust, SQL".to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![existing.clone()], vec![after]])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let saved = repo.upsert(user_id, fields()).await.unwrap();

        assert_eq!(saved.id, existing.id);
        assert_eq!(saved.skills.as_deref(), Some("Rust, SQL"));
    }

    #[tokio::test]
    async fn test_first_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profiles::Model>::new()])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        assert_eq!(repo.first().await.unwrap(), None);
    }
}
