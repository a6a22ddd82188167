//! Create `book` table.
//!
//! `author` is free text; it does not reference the `author` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(big_integer(Book::Id).primary_key().auto_increment())
                    .col(string_len(Book::Title, 255).not_null())
                    .col(string_len(Book::Author, 255).not_null())
                    .col(integer(Book::PublicationYear).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Book::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Book { Table, Id, Title, Author, PublicationYear }
