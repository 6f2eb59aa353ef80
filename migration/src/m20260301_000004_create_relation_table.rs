//! # Relation Table Migration
//!
//! A relation is an undirected edge between two users stored as a directed,
//! canonically ordered pair: `user_id_low <= user_id_high`. Each endpoint keeps
//! its own blocked flag.
//!
//! The unique index on `(user_id_low, user_id_high)` is what turns the ordering
//! into a per-pair key: two concurrent inserts for the same pair, from either
//! direction, cannot both succeed.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Enum type for relation.type
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DO $$
                BEGIN
                    IF NOT EXISTS (SELECT 1 FROM pg_type WHERE typname = 'relation_type') THEN
                        CREATE TYPE relation_type AS ENUM ('event', 'friends', 'matched');
                    END IF;
                END$$;
                "#,
            )
            .await?;

        // =====================================================
        // relation table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Relation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Relation::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Relation::Type)
                            .custom(Alias::new("relation_type"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(Relation::UserIdLow).integer().not_null())
                    .col(ColumnDef::new(Relation::UserIdHigh).integer().not_null())
                    .col(
                        ColumnDef::new(Relation::BlockedLow)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Relation::BlockedHigh)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Relation::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Relation::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_relation_user_id_low")
                            .from(Relation::Table, Relation::UserIdLow)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_relation_user_id_high")
                            .from(Relation::Table, Relation::UserIdHigh)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // One relation per unordered pair
        manager
            .create_index(
                Index::create()
                    .name("user_id_low_user_id_high")
                    .table(Relation::Table)
                    .col(Relation::UserIdLow)
                    .col(Relation::UserIdHigh)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // The unique index already serves lookups on the low slot
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_relation_user_id_high
                ON relation (user_id_high);
                "#,
            )
            .await?;

        // Canonical ordering enforced by storage as well
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE relation
                ADD CONSTRAINT chk_relation_canonical_pair
                CHECK (user_id_low <= user_id_high);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_relation_user_id_high;
                DROP INDEX IF EXISTS user_id_low_user_id_high;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Relation::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TYPE IF EXISTS relation_type;")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Relation {
    Table,
    Id,
    Type,
    UserIdLow,
    UserIdHigh,
    BlockedLow,
    BlockedHigh,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
