//! Service layer providing the resource-CRUD pattern on top of models.
//! - One generic `ResourceService` shared by every resource kind.
//! - Persistence behind the `ResourceStore` trait (SeaORM or in-memory).
//! - Per-kind schema descriptors in `resource::domain`.

pub mod errors;
pub mod resource;
#[cfg(test)]
pub mod test_support;

pub use resource::{
    domain::{Author, Book, RecordId, Resource, User},
    service::ResourceService,
    store::ResourceStore,
};
