use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::{debug, warn};
use uuid::Uuid;

use super::content_table::ContentTable;
use crate::modules::site_content::application::domain::entities::{
    ContentDraft, ContentFields, ContentRecord,
};
use crate::modules::site_content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};
use crate::shared::db::is_unique_violation;

// ============================================================================
// Repository Implementation
// ============================================================================

/// Singleton content storage shared by every `ContentTable`.
pub struct SingletonContentRepository<E: ContentTable> {
    db: Arc<DatabaseConnection>,
    _table: PhantomData<E>,
}

impl<E: ContentTable> Clone for SingletonContentRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            _table: PhantomData,
        }
    }
}

impl<E: ContentTable> SingletonContentRepository<E> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _table: PhantomData,
        }
    }

    async fn find_active<C: ConnectionTrait>(conn: &C) -> Result<Option<E::Model>, DbErr> {
        E::find()
            .filter(E::is_active_column().eq(true))
            .order_by_desc(E::created_at_column())
            .one(conn)
            .await
    }

    async fn find_model<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> Result<E::Model, ContentRepositoryError> {
        E::find()
            .filter(E::id_column().eq(id))
            .one(conn)
            .await
            .map_err(map_db_err)?
            .ok_or(ContentRepositoryError::NotFound)
    }

    /// Clears `is_active` on every row except `keep`.
    async fn deactivate_others<C: ConnectionTrait>(
        conn: &C,
        keep: Option<Uuid>,
    ) -> Result<(), ContentRepositoryError> {
        let mut query = E::update_many()
            .col_expr(E::is_active_column(), Expr::value(false))
            .filter(E::is_active_column().eq(true));
        if let Some(id) = keep {
            query = query.filter(E::id_column().ne(id));
        }

        let result = query.exec(conn).await.map_err(map_db_err)?;
        debug!(
            kind = <E::Fields as ContentFields>::KIND,
            rows = result.rows_affected,
            "Deactivated content rows"
        );
        Ok(())
    }
}

#[async_trait]
impl<E> ContentRepository<E::Fields> for SingletonContentRepository<E>
where
    E: ContentTable + Send + Sync,
    E::Model: IntoActiveModel<E::Row> + Sync,
{
    async fn get_active(&self) -> Result<ContentRecord<E::Fields>, ContentRepositoryError> {
        if let Some(model) = Self::find_active(&*self.db).await.map_err(map_db_err)? {
            return Ok(E::to_record(model));
        }

        let row = E::new_row(Uuid::new_v4(), E::Fields::defaults(), true);
        match row.insert(&*self.db).await {
            Ok(model) => Ok(E::to_record(model)),

            // Another request created the default first.
            Err(e) if is_unique_violation(&e) => {
                warn!(
                    kind = <E::Fields as ContentFields>::KIND,
                    "Concurrent default content insert; re-reading active row"
                );
                Self::find_active(&*self.db)
                    .await
                    .map_err(map_db_err)?
                    .map(E::to_record)
                    .ok_or_else(|| {
                        ContentRepositoryError::DatabaseError(
                            "active content disappeared after conflict".to_string(),
                        )
                    })
            }

            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn find(&self, id: Uuid) -> Result<ContentRecord<E::Fields>, ContentRepositoryError> {
        Self::find_model(&*self.db, id).await.map(E::to_record)
    }

    async fn list(&self) -> Result<Vec<ContentRecord<E::Fields>>, ContentRepositoryError> {
        let models = E::find()
            .order_by_desc(E::created_at_column())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(E::to_record).collect())
    }

    async fn save(
        &self,
        draft: ContentDraft<E::Fields>,
    ) -> Result<ContentRecord<E::Fields>, ContentRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if draft.is_active {
            Self::deactivate_others(&txn, draft.id).await?;
        }

        let model = match draft.id {
            Some(id) => {
                let existing = Self::find_model(&txn, id).await?;
                let mut row: E::Row = existing.into();
                E::write_fields(&mut row, draft.fields);
                E::set_active(&mut row, draft.is_active);
                row.update(&txn).await.map_err(map_db_err)?
            }
            None => E::new_row(Uuid::new_v4(), draft.fields, draft.is_active)
                .insert(&txn)
                .await
                .map_err(map_db_err)?,
        };

        txn.commit().await.map_err(map_db_err)?;
        Ok(E::to_record(model))
    }

    async fn activate(&self, id: Uuid) -> Result<ContentRecord<E::Fields>, ContentRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = Self::find_model(&txn, id).await?;
        Self::deactivate_others(&txn, Some(id)).await?;

        let mut row: E::Row = existing.into();
        E::set_active(&mut row, true);
        let model = row.update(&txn).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(E::to_record(model))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = E::to_record(Self::find_model(&txn, id).await?);
        if existing.is_active {
            return Err(ContentRepositoryError::ActiveRow);
        }

        E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::site_content::adapter::outgoing::sea_orm_entity::{
        about_contents, home_contents,
    };
    use crate::modules::site_content::application::domain::entities::{AboutFields, HomeFields};
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn home_model(id: Uuid, name: &str, is_active: bool) -> home_contents::Model {
        let now = Utc::now().fixed_offset();
        home_contents::Model {
            id,
            profile_picture_url: None,
            name: name.to_string(),
            title: "Engineer".to_string(),
            education: "BSc".to_string(),
            email: None,
            phone: None,
            github_url: None,
            linkedin_url: None,
            is_active,
            created_at: now,
            updated_at: now,
        }
    }

    fn home_repo(db: MockDatabase) -> SingletonContentRepository<home_contents::Entity> {
        SingletonContentRepository::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn test_get_active_returns_existing_row() {
        let id = Uuid::new_v4();
        let repo = home_repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![home_model(id, "Jane", true)]]),
        );

        let record = repo.get_active().await.unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.fields.name, "Jane");
    }

    #[tokio::test]
    async fn test_get_active_inserts_default_when_missing() {
        let id = Uuid::new_v4();
        let repo = home_repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<home_contents::Model>::new()])
                .append_query_results(vec![vec![home_model(id, "HARSHIT RAJ", true)]]),
        );

        let record = repo.get_active().await.unwrap();
        assert!(record.is_active);
        assert_eq!(record.fields.name, HomeFields::defaults().name);
    }

    #[tokio::test]
    async fn test_get_active_rereads_after_losing_insert_race() {
        let winner = Uuid::new_v4();
        let repo = home_repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<home_contents::Model>::new()])
                .append_query_errors(vec![DbErr::Custom(
                    "duplicate key value violates unique constraint \"idx_home_contents_active\""
                        .to_string(),
                )])
                .append_query_results(vec![vec![home_model(winner, "Winner", true)]]),
        );

        let record = repo.get_active().await.unwrap();
        assert_eq!(record.id, winner);
    }

    #[tokio::test]
    async fn test_save_active_row_runs_deactivation_and_insert() {
        let id = Uuid::new_v4();
        let repo = home_repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results(vec![MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .append_query_results(vec![vec![home_model(id, "New", true)]]),
        );

        let record = repo
            .save(ContentDraft {
                id: None,
                fields: HomeFields::defaults(),
                is_active: true,
            })
            .await
            .unwrap();

        assert_eq!(record.id, id);
        assert!(record.is_active);
    }

    #[tokio::test]
    async fn test_save_unknown_id_is_not_found() {
        let repo = home_repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<home_contents::Model>::new()]),
        );

        let result = repo
            .save(ContentDraft {
                id: Some(Uuid::new_v4()),
                fields: HomeFields::defaults(),
                is_active: false,
            })
            .await;

        assert!(matches!(result, Err(ContentRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_refuses_active_row() {
        let id = Uuid::new_v4();
        let repo = home_repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![home_model(id, "Live", true)]]),
        );

        assert!(matches!(
            repo.delete(id).await,
            Err(ContentRepositoryError::ActiveRow)
        ));
    }

    #[tokio::test]
    async fn test_delete_inactive_row() {
        let id = Uuid::new_v4();
        let repo = home_repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![home_model(id, "Old", false)]])
                .append_exec_results(vec![MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }]),
        );

        assert!(repo.delete(id).await.is_ok());
    }

    #[tokio::test]
    async fn test_activate_missing_row() {
        let repo: SingletonContentRepository<about_contents::Entity> =
            SingletonContentRepository::new(Arc::new(
                MockDatabase::new(DatabaseBackend::Postgres)
                    .append_query_results(vec![Vec::<about_contents::Model>::new()])
                    .into_connection(),
            ));

        let result: Result<ContentRecord<AboutFields>, _> = repo.activate(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ContentRepositoryError::NotFound)));
    }
}
