use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkExperiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkExperiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::Company)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::Position)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkExperiences::Location).string_len(200))
                    .col(ColumnDef::new(WorkExperiences::Description).text())
                    .col(ColumnDef::new(WorkExperiences::StartDate).date().not_null())
                    .col(ColumnDef::new(WorkExperiences::EndDate).date())
                    .col(
                        ColumnDef::new(WorkExperiences::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(WorkExperiences::CompanyLogoUrl).text())
                    .col(ColumnDef::new(WorkExperiences::Technologies).string_len(500))
                    .col(
                        ColumnDef::new(WorkExperiences::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::IsVisible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_work_experiences_listing
                ON work_experiences (display_order, start_date DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_work_experiences_updated_at
                BEFORE UPDATE ON work_experiences
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_work_experiences_updated_at ON work_experiences",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WorkExperiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WorkExperiences {
    Table,
    Id,
    Company,
    Position,
    Location,
    Description,
    StartDate,
    EndDate,
    IsCurrent,
    CompanyLogoUrl,
    Technologies,
    DisplayOrder,
    IsVisible,
    CreatedAt,
    UpdatedAt,
}
