use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait,
    ActiveValue::{self, NotSet, Set, Unchanged},
    DatabaseConnection, EntityTrait, IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};

use crate::errors::ServiceError;
use crate::resource::domain::{Author, Book, RecordId, Resource, User};
use crate::resource::store::ResourceStore;

/// Maps a resource kind onto its SeaORM entity.
pub trait Persisted: Resource {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync + 'static;

    fn from_model(model: <Self::Entity as EntityTrait>::Model) -> Self;

    /// Every scalar column `Set`; the key `Unchanged` when present, `NotSet` otherwise.
    fn into_active(self) -> Self::ActiveModel;
}

fn key(id: Option<RecordId>) -> ActiveValue<RecordId> {
    match id {
        Some(id) => Unchanged(id),
        None => NotSet,
    }
}

/// SeaORM-backed store, one per resource kind.
pub struct SeaOrmStore<R> {
    db: DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<R> SeaOrmStore<R> {
    pub fn new(db: DatabaseConnection) -> Self { Self { db, _resource: PhantomData } }
}

#[async_trait]
impl<R> ResourceStore<R> for SeaOrmStore<R>
where
    R: Persisted,
    <R::Entity as EntityTrait>::Model: IntoActiveModel<R::ActiveModel> + Sync,
    <<R::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<RecordId>,
{
    async fn insert(&self, mut record: R) -> Result<R, ServiceError> {
        record.set_id(None);
        let model = record.into_active().insert(&self.db).await?;
        Ok(R::from_model(model))
    }

    async fn list_all(&self) -> Result<Vec<R>, ServiceError> {
        let mut select = <R::Entity as EntityTrait>::find();
        for pk in <<R::Entity as EntityTrait>::PrimaryKey as Iterable>::iter() {
            select = select.order_by_asc(pk.into_column());
        }
        let rows = select.all(&self.db).await?;
        Ok(rows.into_iter().map(R::from_model).collect())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<R>, ServiceError> {
        let found = <R::Entity as EntityTrait>::find_by_id(id).one(&self.db).await?;
        Ok(found.map(R::from_model))
    }

    async fn save(&self, record: R) -> Result<R, ServiceError> {
        if record.id().is_none() {
            return Err(ServiceError::Store(format!("cannot save {} without id", R::KIND)));
        }
        let model = record.into_active().update(&self.db).await?;
        Ok(R::from_model(model))
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<(), ServiceError> {
        <R::Entity as EntityTrait>::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

impl Persisted for Author {
    type Entity = models::author::Entity;
    type ActiveModel = models::author::ActiveModel;

    fn from_model(m: models::author::Model) -> Self {
        Author { id: Some(m.id), name: m.name, nationality: m.nationality }
    }

    fn into_active(self) -> Self::ActiveModel {
        models::author::ActiveModel { id: key(self.id), name: Set(self.name), nationality: Set(self.nationality) }
    }
}

impl Persisted for Book {
    type Entity = models::book::Entity;
    type ActiveModel = models::book::ActiveModel;

    fn from_model(m: models::book::Model) -> Self {
        Book { id: Some(m.id), title: m.title, author: m.author, publication_year: m.publication_year }
    }

    fn into_active(self) -> Self::ActiveModel {
        models::book::ActiveModel {
            id: key(self.id),
            title: Set(self.title),
            author: Set(self.author),
            publication_year: Set(self.publication_year),
        }
    }
}

impl Persisted for User {
    type Entity = models::user::Entity;
    type ActiveModel = models::user::ActiveModel;

    fn from_model(m: models::user::Model) -> Self {
        User { id: Some(m.id), name: m.name, email: m.email }
    }

    fn into_active(self) -> Self::ActiveModel {
        models::user::ActiveModel { id: key(self.id), name: Set(self.name), email: Set(self.email) }
    }
}
