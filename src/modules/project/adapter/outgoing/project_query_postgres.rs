// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::project_repository_postgres::model_to_project;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{Column, Entity};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_query::{
    PageRequest, PageResult, ProjectListFilter, ProjectQuery, ProjectQueryError,
};

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// `order asc, created_at desc`
fn ordered(query: Select<Entity>) -> Select<Entity> {
    query
        .order_by_asc(Column::DisplayOrder)
        .order_by_desc(Column::CreatedAt)
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn get_by_id(&self, project_id: Uuid) -> Result<Project, ProjectQueryError> {
        Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_project)
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Project, ProjectQueryError> {
        let normalized_slug = slug.trim().to_lowercase();

        Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Slug))).eq(normalized_slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_project)
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn list(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Project>, ProjectQueryError> {
        let mut query = Entity::find();

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category));
        }
        if let Some(featured) = filter.featured {
            query = query.filter(Column::Featured.eq(featured));
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let items = ordered(query)
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_project)
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn featured(&self) -> Result<Vec<Project>, ProjectQueryError> {
        let projects = ordered(Entity::find().filter(Column::Featured.eq(true)))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(projects.into_iter().map(model_to_project).collect())
    }

    async fn categories(&self) -> Result<Vec<String>, ProjectQueryError> {
        Entity::find()
            .select_only()
            .column(Column::Category)
            .distinct()
            .filter(Column::Category.is_not_null())
            .filter(Column::Category.ne(""))
            .order_by_asc(Column::Category)
            .into_tuple::<String>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
    use chrono::Utc;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn project_model(title: &str, slug: &str, featured: bool) -> projects::Model {
        let now = Utc::now().fixed_offset();
        projects::Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            slug: slug.to_string(),
            description: "desc".to_string(),
            detailed_description: None,
            image_url: None,
            github_link: None,
            live_link: None,
            technologies: "Rust".to_string(),
            category: None,
            featured,
            display_order: 0,
            created: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_get_by_slug_found() {
        let model = project_model("Blog", "blog", false);
        let id = model.id;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let project = query.get_by_slug(" Blog ").await.unwrap();

        assert_eq!(project.id, id);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let result = query.get_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ProjectQueryError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_reports_total_and_page() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([(
                "num_items".to_string(),
                Value::BigInt(Some(14)),
            )])]])
            .append_query_results(vec![vec![
                project_model("A", "a", true),
                project_model("B", "b", false),
            ]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let page = query
            .list(ProjectListFilter::default(), PageRequest::new(Some(2), None))
            .await
            .unwrap();

        assert_eq!(page.total, 14);
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[tokio::test]
    async fn test_categories_projection() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                BTreeMap::from([("category".to_string(), Value::from("cli"))]),
                BTreeMap::from([("category".to_string(), Value::from("web"))]),
            ]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        assert_eq!(query.categories().await.unwrap(), vec!["cli", "web"]);
    }

    #[tokio::test]
    async fn test_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("boom".to_string())])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        assert!(matches!(
            query.featured().await,
            Err(ProjectQueryError::DatabaseError(_))
        ));
    }
}
