use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, Set};

use crate::modules::skill::application::domain::entities::SkillCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum Category {
    #[sea_orm(string_value = "programming")]
    Programming,
    #[sea_orm(string_value = "framework")]
    Framework,
    #[sea_orm(string_value = "database")]
    Database,
    #[sea_orm(string_value = "tool")]
    Tool,
    #[sea_orm(string_value = "soft")]
    Soft,
    #[sea_orm(string_value = "other")]
    Other,
}

impl From<SkillCategory> for Category {
    fn from(value: SkillCategory) -> Self {
        match value {
            SkillCategory::Programming => Category::Programming,
            SkillCategory::Framework => Category::Framework,
            SkillCategory::Database => Category::Database,
            SkillCategory::Tool => Category::Tool,
            SkillCategory::Soft => Category::Soft,
            SkillCategory::Other => Category::Other,
        }
    }
}

impl From<Category> for SkillCategory {
    fn from(value: Category) -> Self {
        match value {
            Category::Programming => SkillCategory::Programming,
            Category::Framework => SkillCategory::Framework,
            Category::Database => SkillCategory::Database,
            Category::Tool => SkillCategory::Tool,
            Category::Soft => SkillCategory::Soft,
            Category::Other => SkillCategory::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,

    pub category: Category,

    pub proficiency_level: i32,

    #[sea_orm(nullable)]
    pub icon: Option<String>,

    pub is_visible: bool,

    pub display_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        if insert && !self.created_at.is_set() {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);

        Ok(self)
    }
}
