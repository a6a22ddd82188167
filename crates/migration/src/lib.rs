//! Migrator registering one table per resource kind.
//! The tables are independent: no foreign keys between them.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_author;
mod m20240101_000002_create_book;
mod m20240101_000003_create_user;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_author::Migration),
            Box::new(m20240101_000002_create_book::Migration),
            Box::new(m20240101_000003_create_user::Migration),
        ]
    }
}
