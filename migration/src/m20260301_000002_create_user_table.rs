use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(User::FirstName).string_len(255))
                    .col(ColumnDef::new(User::LastName).string_len(255))
                    .col(ColumnDef::new(User::Email).string_len(255))
                    .col(ColumnDef::new(User::Sex).string_len(16))
                    .col(ColumnDef::new(User::Birthday).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(User::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(User::Timezone).string_len(64))
                    .col(ColumnDef::new(User::Lat).double())
                    .col(ColumnDef::new(User::Lng).double())
                    .col(ColumnDef::new(User::Token).string_len(255))
                    .col(ColumnDef::new(User::Avatar).string_len(1024))
                    .col(ColumnDef::new(User::Cover).string_len(1024))
                    .col(ColumnDef::new(User::ProviderInfo).json_binary())
                    .col(ColumnDef::new(User::Percent).integer())
                    .col(ColumnDef::new(User::CityId).integer())
                    .col(ColumnDef::new(User::CountryId).integer())
                    .col(ColumnDef::new(User::LanguageId).integer())
                    .col(
                        ColumnDef::new(User::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(User::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Lookup tables are referenced, never owned
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_city_id")
                            .from(User::Table, User::CityId)
                            .to(Cities::Table, Cities::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_country_id")
                            .from(User::Table, User::CountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_language_id")
                            .from(User::Table, User::LanguageId)
                            .to(Language::Table, Language::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_user_active
                ON "user" (id)
                WHERE is_active = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_user_active")
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Sex,
    Birthday,
    IsActive,
    Timezone,
    Lat,
    Lng,
    Token,
    Avatar,
    Cover,
    ProviderInfo,
    Percent,
    CityId,
    CountryId,
    LanguageId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Cities {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Countries {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Language {
    Table,
    Id,
}
