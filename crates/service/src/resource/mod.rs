//! Resource module: three-layer split (domain, store, service).
//!
//! `domain` describes the record shapes, `store` is the persistence contract,
//! `service` is the CRUD logic written once for every kind.

pub mod domain;
pub mod repo;
pub mod service;
pub mod store;

pub use service::ResourceService;
