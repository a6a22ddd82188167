use async_trait::async_trait;

use super::domain::{RecordId, Resource};
use crate::errors::ServiceError;

/// Keyed collection of records of one resource kind.
#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    /// Persist `record` under a freshly assigned identifier; any identifier it carries is ignored.
    async fn insert(&self, record: R) -> Result<R, ServiceError>;
    /// Every stored record. Order is up to the implementation.
    async fn list_all(&self) -> Result<Vec<R>, ServiceError>;
    async fn find_by_id(&self, id: RecordId) -> Result<Option<R>, ServiceError>;
    /// Write back a record that already carries its identifier. Fails if the
    /// record was removed in the meantime.
    async fn save(&self, record: R) -> Result<R, ServiceError>;
    /// Remove the record if present; absent ids are a no-op.
    async fn delete_by_id(&self, id: RecordId) -> Result<(), ServiceError>;
}

/// In-memory store for tests and local runs
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    struct State<R> {
        last_id: RecordId,
        records: BTreeMap<RecordId, R>,
    }

    /// Identifiers start at 1 and are never handed out twice, even after deletes.
    pub struct InMemoryStore<R> {
        state: RwLock<State<R>>,
    }

    impl<R> Default for InMemoryStore<R> {
        fn default() -> Self {
            Self { state: RwLock::new(State { last_id: 0, records: BTreeMap::new() }) }
        }
    }

    impl<R> InMemoryStore<R> {
        pub fn new() -> Self { Self::default() }

        pub async fn len(&self) -> usize { self.state.read().await.records.len() }

        pub async fn is_empty(&self) -> bool { self.len().await == 0 }
    }

    #[async_trait]
    impl<R: Resource> ResourceStore<R> for InMemoryStore<R> {
        async fn insert(&self, mut record: R) -> Result<R, ServiceError> {
            let mut state = self.state.write().await;
            let id = state
                .last_id
                .checked_add(1)
                .ok_or_else(|| ServiceError::Store(format!("{} identifiers exhausted", R::KIND)))?;
            state.last_id = id;
            record.set_id(Some(id));
            state.records.insert(id, record.clone());
            Ok(record)
        }

        async fn list_all(&self) -> Result<Vec<R>, ServiceError> {
            let state = self.state.read().await;
            Ok(state.records.values().cloned().collect())
        }

        async fn find_by_id(&self, id: RecordId) -> Result<Option<R>, ServiceError> {
            let state = self.state.read().await;
            Ok(state.records.get(&id).cloned())
        }

        async fn save(&self, record: R) -> Result<R, ServiceError> {
            let id = record
                .id()
                .ok_or_else(|| ServiceError::Store(format!("cannot save {} without id", R::KIND)))?;
            let mut state = self.state.write().await;
            match state.records.get_mut(&id) {
                Some(slot) => *slot = record.clone(),
                None => return Err(ServiceError::Store(format!("{} with id {} no longer exists", R::KIND, id))),
            }
            Ok(record)
        }

        async fn delete_by_id(&self, id: RecordId) -> Result<(), ServiceError> {
            let mut state = self.state.write().await;
            state.records.remove(&id);
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::resource::domain::Author;

        #[tokio::test]
        async fn insert_assigns_sequential_ids_ignoring_input() {
            let store = InMemoryStore::<Author>::new();
            let a = store.insert(Author { id: Some(99), ..Author::new("A", "X") }).await.unwrap();
            let b = store.insert(Author::new("B", "Y")).await.unwrap();
            assert_eq!(a.id, Some(1));
            assert_eq!(b.id, Some(2));
            assert_eq!(store.len().await, 2);
        }

        #[tokio::test]
        async fn ids_are_not_reused_after_delete() {
            let store = InMemoryStore::<Author>::new();
            let a = store.insert(Author::new("A", "X")).await.unwrap();
            store.delete_by_id(a.id.unwrap()).await.unwrap();
            let b = store.insert(Author::new("B", "Y")).await.unwrap();
            assert_eq!(b.id, Some(2));
            assert!(store.find_by_id(1).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn delete_missing_is_noop() {
            let store = InMemoryStore::<Author>::new();
            store.delete_by_id(5).await.unwrap();
            assert!(store.is_empty().await);
        }

        #[tokio::test]
        async fn save_after_delete_does_not_resurrect() {
            let store = InMemoryStore::<Author>::new();
            let a = store.insert(Author::new("A", "X")).await.unwrap();
            store.delete_by_id(a.id.unwrap()).await.unwrap();

            let err = store.save(Author { name: "B".into(), ..a }).await.unwrap_err();
            assert!(matches!(err, ServiceError::Store(_)));
            assert!(store.is_empty().await);
        }

        #[tokio::test]
        async fn save_requires_id() {
            let store = InMemoryStore::<Author>::new();
            let err = store.save(Author::new("A", "X")).await.unwrap_err();
            assert!(matches!(err, ServiceError::Store(_)));
        }
    }
}
