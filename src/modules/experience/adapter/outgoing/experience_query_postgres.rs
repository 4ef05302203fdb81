use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::experience::adapter::outgoing::experience_repository_postgres::model_to_experience;
use crate::modules::experience::adapter::outgoing::sea_orm_entity::work_experiences::{
    Column, Entity,
};
use crate::modules::experience::application::domain::entities::WorkExperience;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError, Visibility,
};

#[derive(Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn list(
        &self,
        visibility: Visibility,
    ) -> Result<Vec<WorkExperience>, ExperienceQueryError> {
        let mut query = Entity::find();
        if visibility == Visibility::VisibleOnly {
            query = query.filter(Column::IsVisible.eq(true));
        }

        let rows = query
            .order_by_desc(Column::IsCurrent)
            .order_by_desc(Column::StartDate)
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(|e| ExperienceQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(model_to_experience).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::experience::adapter::outgoing::experience_repository_postgres::tests::experience_model;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_visible_list_filters_and_orders() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                experience_model("Current", true),
                experience_model("Past", false),
            ]])
            .into_connection();
        let db = Arc::new(db);

        let query = ExperienceQueryPostgres::new(db.clone());
        let rows = query.list(Visibility::VisibleOnly).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].company, "Current");

        drop(query);
        let log = Arc::try_unwrap(db)
            .map(|conn| conn.into_transaction_log())
            .unwrap_or_default();
        let sql = format!("{:?}", log);
        assert!(sql.contains("is_visible"));
        assert!(sql.contains("ORDER BY"));
    }
}
