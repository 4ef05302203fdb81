use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_repository::{
    NewProject, ProjectChanges, ProjectFields, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::db::is_unique_violation;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// True when a row other than `exclude` already owns `slug`.
    async fn slug_taken<C: ConnectionTrait>(
        conn: &C,
        slug: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, ProjectRepositoryError> {
        let mut query = Entity::find().filter(Column::Slug.eq(slug));
        if let Some(id) = exclude {
            query = query.filter(Column::Id.ne(id));
        }

        let count = query.count(conn).await.map_err(map_db_err)?;
        Ok(count > 0)
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError> {
        let slug = data.slug.trim().to_lowercase();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if Self::slug_taken(&txn, &slug, None).await? {
            return Err(ProjectRepositoryError::SlugAlreadyExists);
        }

        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(slug),
            created_at: NotSet,
            updated_at: NotSet,
            ..Default::default()
        };
        apply_fields(&mut model, data.fields);

        let inserted = model.insert(&txn).await.map_err(map_slug_error)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(model_to_project(inserted))
    }

    async fn update_project(
        &self,
        project_id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Project, ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = Entity::find_by_id(project_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();

        if let Some(slug) = changes.slug {
            let slug = slug.trim().to_lowercase();
            if Self::slug_taken(&txn, &slug, Some(project_id)).await? {
                return Err(ProjectRepositoryError::SlugAlreadyExists);
            }
            model.slug = Set(slug);
        }
        apply_fields(&mut model, changes.fields);

        let updated = model.update(&txn).await.map_err(map_slug_error)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(model_to_project(updated))
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(project_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn apply_fields(model: &mut ActiveModel, fields: ProjectFields) {
    model.title = Set(fields.title);
    model.description = Set(fields.description);
    model.detailed_description = Set(fields.detailed_description);
    model.image_url = Set(fields.image_url);
    model.github_link = Set(fields.github_link);
    model.live_link = Set(fields.live_link);
    model.technologies = Set(fields.technologies);
    model.category = Set(fields.category);
    model.featured = Set(fields.featured);
    model.display_order = Set(fields.order);
    model.created = Set(fields.created);
}

pub(crate) fn model_to_project(model: projects::Model) -> Project {
    Project {
        id: model.id,
        title: model.title,
        slug: model.slug,
        description: model.description,
        detailed_description: model.detailed_description,
        image_url: model.image_url,
        github_link: model.github_link,
        live_link: model.live_link,
        technologies: model.technologies,
        category: model.category,
        featured: model.featured,
        order: model.display_order,
        created: model.created,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

/// The loser of a concurrent slug race trips the unique index.
fn map_slug_error(e: DbErr) -> ProjectRepositoryError {
    if is_unique_violation(&e) {
        ProjectRepositoryError::SlugAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
