//! Service wiring shared by the router and the tests.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::resource::{repo::SeaOrmStore, store::memory::InMemoryStore};
use service::{Author, Book, ResourceService, User};

/// One `ResourceService` per resource kind, each over its own store.
pub struct AppServices<A, B, U> {
    pub authors: ResourceService<Author, A>,
    pub books: ResourceService<Book, B>,
    pub users: ResourceService<User, U>,
}

pub type SeaOrmServices = AppServices<SeaOrmStore<Author>, SeaOrmStore<Book>, SeaOrmStore<User>>;

pub type InMemoryServices = AppServices<InMemoryStore<Author>, InMemoryStore<Book>, InMemoryStore<User>>;

impl SeaOrmServices {
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self {
            authors: ResourceService::new(Arc::new(SeaOrmStore::new(db.clone()))),
            books: ResourceService::new(Arc::new(SeaOrmStore::new(db.clone()))),
            users: ResourceService::new(Arc::new(SeaOrmStore::new(db))),
        }
    }
}

impl InMemoryServices {
    pub fn in_memory() -> Self {
        Self {
            authors: ResourceService::new(Arc::new(InMemoryStore::new())),
            books: ResourceService::new(Arc::new(InMemoryStore::new())),
            users: ResourceService::new(Arc::new(InMemoryStore::new())),
        }
    }
}
