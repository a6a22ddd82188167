//! Create `author` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Author::Table)
                    .if_not_exists()
                    .col(big_integer(Author::Id).primary_key().auto_increment())
                    .col(string_len(Author::Name, 255).not_null())
                    .col(string_len(Author::Nationality, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Author::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Author { Table, Id, Name, Nationality }
