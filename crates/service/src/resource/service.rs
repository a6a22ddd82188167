use std::{marker::PhantomData, sync::Arc};

use tracing::{debug, info, instrument};

use super::domain::{RecordId, Resource};
use super::store::ResourceStore;
use crate::errors::ServiceError;

/// CRUD service for one resource kind, independent of web framework.
///
/// Holds no state of its own; everything lives in the store, so clones are
/// cheap and can be shared across request handlers.
pub struct ResourceService<R, S> {
    store: Arc<S>,
    _resource: PhantomData<fn() -> R>,
}

impl<R, S> Clone for ResourceService<R, S> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store), _resource: PhantomData }
    }
}

impl<R: Resource, S: ResourceStore<R>> ResourceService<R, S> {
    pub fn new(store: Arc<S>) -> Self { Self { store, _resource: PhantomData } }

    pub fn store(&self) -> &Arc<S> { &self.store }

    #[instrument(skip(self), fields(resource = R::COLLECTION))]
    pub async fn list(&self) -> Result<Vec<R>, ServiceError> {
        let records = self.store.list_all().await?;
        debug!(count = records.len(), "listed records");
        Ok(records)
    }

    #[instrument(skip(self), fields(resource = R::COLLECTION))]
    pub async fn get(&self, id: RecordId) -> Result<R, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::KIND, id))
    }

    /// Persist `payload` as a new record; its identifier, if any, is discarded.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::{Author, ResourceService};
    /// use service::resource::store::memory::InMemoryStore;
    ///
    /// let svc = ResourceService::new(Arc::new(InMemoryStore::<Author>::new()));
    /// let created = tokio_test::block_on(svc.create(Author { id: Some(10), ..Author::new("Italo Calvino", "Italian") })).unwrap();
    /// assert_eq!(created.id, Some(1));
    /// assert_eq!(created.name, "Italo Calvino");
    /// ```
    #[instrument(skip(self, payload), fields(resource = R::COLLECTION))]
    pub async fn create(&self, mut payload: R) -> Result<R, ServiceError> {
        payload.set_id(None);
        let created = self.store.insert(payload).await?;
        info!(id = ?created.id(), "record_created");
        Ok(created)
    }

    /// Full-replace update: every scalar field of the stored record is
    /// overwritten from `payload`, even when the payload value is empty/zero.
    /// The stored identifier never changes.
    #[instrument(skip(self, payload), fields(resource = R::COLLECTION))]
    pub async fn update(&self, id: RecordId, payload: R) -> Result<R, ServiceError> {
        let mut existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::KIND, id))?;
        existing.apply(payload);
        existing.set_id(Some(id));
        let saved = self.store.save(existing).await?;
        info!(id, "record_updated");
        Ok(saved)
    }

    /// No existence check: deleting an unknown id succeeds.
    #[instrument(skip(self), fields(resource = R::COLLECTION))]
    pub async fn delete(&self, id: RecordId) -> Result<(), ServiceError> {
        self.store.delete_by_id(id).await?;
        info!(id, "record_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::domain::{Author, Book, User};
    use crate::resource::store::memory::InMemoryStore;

    fn service<R: Resource>() -> ResourceService<R, InMemoryStore<R>> {
        ResourceService::new(Arc::new(InMemoryStore::new()))
    }

    #[tokio::test]
    async fn create_then_read() {
        let svc = service::<Book>();
        let created = svc.create(Book::new("Le città invisibili", "Italo Calvino", 1972)).await.unwrap();
        let id = created.id.expect("assigned id");
        let found = svc.store().find_by_id(id).await.unwrap();
        assert_eq!(found, Some(created.clone()));
        assert_eq!(svc.get(id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn create_ignores_payload_id() {
        let svc = service::<User>();
        svc.create(User::new("Ann", "ann@example.com")).await.unwrap();
        let second = svc.create(User { id: Some(1), ..User::new("Bob", "bob@example.com") }).await.unwrap();
        assert_eq!(second.id, Some(2));
        assert_eq!(svc.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_contains_exactly_created_records() {
        let svc = service::<Author>();
        assert!(svc.list().await.unwrap().is_empty());

        let mut created = Vec::new();
        for (name, nat) in [("Eco", "Italian"), ("Murakami", "Japanese"), ("Borges", "Argentine")] {
            created.push(svc.create(Author::new(name, nat)).await.unwrap());
        }
        let mut listed = svc.list().await.unwrap();
        listed.sort_by_key(|a| a.id);
        created.sort_by_key(|a| a.id);
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn update_overwrites_full_field_set() {
        let svc = service::<Author>();
        let stored = svc.create(Author::new("A", "X")).await.unwrap();
        let id = stored.id.unwrap();

        let updated = svc.update(id, Author { id: None, name: "B".into(), nationality: String::new() }).await.unwrap();
        assert_eq!(updated, Author { id: Some(id), name: "B".into(), nationality: String::new() });
        assert_eq!(svc.get(id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let svc = service::<Book>();
        let err = svc.update(999, Book::new("T", "A", 2000)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_keeps_identifier() {
        let svc = service::<User>();
        let stored = svc.create(User::new("Ann", "ann@example.com")).await.unwrap();
        let id = stored.id.unwrap();

        let updated = svc.update(id, User { id: Some(id + 100), ..User::new("Ann B", "annb@example.com") }).await.unwrap();
        assert_eq!(updated.id, Some(id));
        assert!(svc.store().find_by_id(id + 100).await.unwrap().is_none());
        assert_eq!(svc.list().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let svc = service::<Book>();
        let stored = svc.create(Book::new("Da Eliminare", "A", 1999)).await.unwrap();
        let id = stored.id.unwrap();

        svc.delete(id).await.unwrap();
        svc.delete(id).await.unwrap();
        assert!(matches!(svc.get(id).await, Err(ServiceError::NotFound(_))));
        assert!(svc.list().await.unwrap().is_empty());
    }
}
