use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "about_contents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub skills_languages: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub skills_frameworks: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub skills_tools: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub skills_soft: Option<String>,

    #[sea_orm(nullable)]
    pub internship_1_company: Option<String>,
    #[sea_orm(nullable)]
    pub internship_1_position: Option<String>,
    #[sea_orm(nullable)]
    pub internship_1_date: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub internship_1_description: Option<String>,
    #[sea_orm(nullable)]
    pub internship_1_tech: Option<String>,

    #[sea_orm(nullable)]
    pub internship_2_company: Option<String>,
    #[sea_orm(nullable)]
    pub internship_2_position: Option<String>,
    #[sea_orm(nullable)]
    pub internship_2_date: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub internship_2_description: Option<String>,
    #[sea_orm(nullable)]
    pub internship_2_tech: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub certificates: Option<String>,

    #[sea_orm(nullable)]
    pub education_1_institution: Option<String>,
    #[sea_orm(nullable)]
    pub education_1_degree: Option<String>,
    #[sea_orm(nullable)]
    pub education_1_date: Option<String>,
    #[sea_orm(nullable)]
    pub education_1_cgpa: Option<String>,
    #[sea_orm(nullable)]
    pub education_1_location: Option<String>,

    #[sea_orm(nullable)]
    pub education_2_institution: Option<String>,
    #[sea_orm(nullable)]
    pub education_2_degree: Option<String>,
    #[sea_orm(nullable)]
    pub education_2_date: Option<String>,
    #[sea_orm(nullable)]
    pub education_2_cgpa: Option<String>,
    #[sea_orm(nullable)]
    pub education_2_location: Option<String>,

    /// Partial unique index `WHERE is_active`.
    pub is_active: bool,

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
