use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn timestamps(table: &mut TableCreateStatement) -> &mut TableCreateStatement {
    table
        .col(
            ColumnDef::new(Alias::new("created_at"))
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Alias::new("updated_at"))
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
}

/// At most one active row per table; the flag flip happens in a transaction.
fn single_active_sql(table: &str) -> String {
    format!(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_{table}_single_active
        ON {table} (is_active)
        WHERE is_active = true;

        CREATE TRIGGER update_{table}_updated_at
        BEFORE UPDATE ON {table}
        FOR EACH ROW
        EXECUTE FUNCTION update_updated_at_column();
        "#
    )
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // home_contents
        // =====================================================
        let mut home = Table::create();
        home.table(HomeContents::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(HomeContents::Id)
                    .uuid()
                    .not_null()
                    .primary_key()
                    .default(Expr::cust("gen_random_uuid()")),
            )
            .col(ColumnDef::new(HomeContents::ProfilePictureUrl).text())
            .col(ColumnDef::new(HomeContents::Name).string_len(200).not_null())
            .col(ColumnDef::new(HomeContents::Title).string_len(500).not_null())
            .col(
                ColumnDef::new(HomeContents::Education)
                    .string_len(300)
                    .not_null(),
            )
            .col(ColumnDef::new(HomeContents::Email).string_len(254))
            .col(ColumnDef::new(HomeContents::Phone).string_len(20))
            .col(ColumnDef::new(HomeContents::GithubUrl).text())
            .col(ColumnDef::new(HomeContents::LinkedinUrl).text())
            .col(
                ColumnDef::new(HomeContents::IsActive)
                    .boolean()
                    .not_null()
                    .default(false),
            );
        manager.create_table(timestamps(&mut home).to_owned()).await?;

        manager
            .get_connection()
            .execute_unprepared(&single_active_sql("home_contents"))
            .await?;

        // =====================================================
        // about_contents
        // =====================================================
        let mut about = Table::create();
        about
            .table(AboutContents::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(AboutContents::Id)
                    .uuid()
                    .not_null()
                    .primary_key()
                    .default(Expr::cust("gen_random_uuid()")),
            )
            .col(ColumnDef::new(AboutContents::Bio).text())
            .col(ColumnDef::new(AboutContents::SkillsLanguages).text())
            .col(ColumnDef::new(AboutContents::SkillsFrameworks).text())
            .col(ColumnDef::new(AboutContents::SkillsTools).text())
            .col(ColumnDef::new(AboutContents::SkillsSoft).text())
            .col(ColumnDef::new(AboutContents::Certificates).text());

        for slot in 1..=2 {
            about
                .col(ColumnDef::new(Alias::new(format!("internship_{slot}_company"))).string_len(200))
                .col(ColumnDef::new(Alias::new(format!("internship_{slot}_position"))).string_len(200))
                .col(ColumnDef::new(Alias::new(format!("internship_{slot}_date"))).string_len(100))
                .col(ColumnDef::new(Alias::new(format!("internship_{slot}_description"))).text())
                .col(ColumnDef::new(Alias::new(format!("internship_{slot}_tech"))).string_len(300))
                .col(ColumnDef::new(Alias::new(format!("education_{slot}_institution"))).string_len(200))
                .col(ColumnDef::new(Alias::new(format!("education_{slot}_degree"))).string_len(200))
                .col(ColumnDef::new(Alias::new(format!("education_{slot}_date"))).string_len(100))
                .col(ColumnDef::new(Alias::new(format!("education_{slot}_cgpa"))).string_len(50))
                .col(ColumnDef::new(Alias::new(format!("education_{slot}_location"))).string_len(100));
        }

        about.col(
            ColumnDef::new(AboutContents::IsActive)
                .boolean()
                .not_null()
                .default(false),
        );
        manager.create_table(timestamps(&mut about).to_owned()).await?;

        manager
            .get_connection()
            .execute_unprepared(&single_active_sql("about_contents"))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_home_contents_updated_at ON home_contents;
                DROP TRIGGER IF EXISTS update_about_contents_updated_at ON about_contents;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AboutContents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HomeContents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HomeContents {
    Table,
    Id,
    ProfilePictureUrl,
    Name,
    Title,
    Education,
    Email,
    Phone,
    GithubUrl,
    LinkedinUrl,
    IsActive,
}

#[derive(DeriveIden)]
enum AboutContents {
    Table,
    Id,
    Bio,
    SkillsLanguages,
    SkillsFrameworks,
    SkillsTools,
    SkillsSoft,
    Certificates,
    IsActive,
}
