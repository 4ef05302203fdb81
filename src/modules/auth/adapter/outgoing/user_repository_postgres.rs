use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_repository::{
    NewSuperuser, UserRepository, UserRepositoryError,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_superuser(&self, user: NewSuperuser) -> Result<UserId, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            is_superuser: Set(true),
            is_active: Set(true),
            first_name: Set(String::new()),
            last_name: Set(String::new()),
            bio: Set(None),
            website: Set(None),
            github: Set(None),
            linkedin: Set(None),
            twitter: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UsernameAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(UserId::from(inserted.id))
    }

    async fn promote_with_password(
        &self,
        user_id: UserId,
        email: &str,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::NotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.password_hash = Set(password_hash);
        active_user.email = Set(email.to_string());
        active_user.is_superuser = Set(true);
        active_user.is_active = Set(true);

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn user_model(id: Uuid) -> UserModel {
        let now = Utc::now();
        UserModel {
            id,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: "hash".to_string(),
            is_superuser: true,
            is_active: true,
            first_name: String::new(),
            last_name: String::new(),
            bio: None,
            website: None,
            github: None,
            linkedin: None,
            twitter: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn new_superuser() -> NewSuperuser {
        NewSuperuser {
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_superuser_returns_inserted_id() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(id)]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let created = repo.create_superuser(new_superuser()).await.unwrap();

        assert_eq!(created.value(), id);
    }

    #[tokio::test]
    async fn test_create_superuser_duplicate_username() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"users_username_key\"".into(),
            )])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_superuser(new_superuser()).await;

        assert!(matches!(result, Err(UserRepositoryError::UsernameAlreadyExists)));
    }

    #[tokio::test]
    async fn test_promote_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .promote_with_password(UserId::from(Uuid::new_v4()), "a@b.co", "h".into())
            .await;

        assert!(matches!(result, Err(UserRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_promote_existing_user() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(id)], vec![user_model(id)]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .promote_with_password(UserId::from(id), "new@example.com", "new-hash".into())
            .await;

        assert!(result.is_ok());
    }
}
