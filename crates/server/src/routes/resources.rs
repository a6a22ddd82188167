//! Generic CRUD handlers, mounted once per resource kind under `/{collection}`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use service::{RecordId, Resource, ResourceService, ResourceStore};

use crate::errors::ApiError;

/// `GET|POST /{collection}` and `GET|PUT|DELETE /{collection}/:id`
pub fn resource_router<R, S>(service: ResourceService<R, S>) -> Router
where
    R: Resource + Serialize + DeserializeOwned,
    S: ResourceStore<R> + 'static,
{
    let root = format!("/{}", R::COLLECTION);
    let item = format!("/{}/:id", R::COLLECTION);
    Router::new()
        .route(&root, get(list::<R, S>).post(create::<R, S>))
        .route(&item, get(fetch::<R, S>).put(update::<R, S>).delete(remove::<R, S>))
        .with_state(service)
}

async fn list<R, S>(State(svc): State<ResourceService<R, S>>) -> Result<Json<Vec<R>>, ApiError>
where
    R: Resource + Serialize,
    S: ResourceStore<R>,
{
    Ok(Json(svc.list().await?))
}

async fn fetch<R, S>(
    State(svc): State<ResourceService<R, S>>,
    Path(id): Path<RecordId>,
) -> Result<Json<R>, ApiError>
where
    R: Resource + Serialize,
    S: ResourceStore<R>,
{
    Ok(Json(svc.get(id).await?))
}

async fn create<R, S>(
    State(svc): State<ResourceService<R, S>>,
    Json(payload): Json<R>,
) -> Result<Json<R>, ApiError>
where
    R: Resource + Serialize + DeserializeOwned,
    S: ResourceStore<R>,
{
    Ok(Json(svc.create(payload).await?))
}

async fn update<R, S>(
    State(svc): State<ResourceService<R, S>>,
    Path(id): Path<RecordId>,
    Json(payload): Json<R>,
) -> Result<Json<R>, ApiError>
where
    R: Resource + Serialize + DeserializeOwned,
    S: ResourceStore<R>,
{
    Ok(Json(svc.update(id, payload).await?))
}

async fn remove<R, S>(
    State(svc): State<ResourceService<R, S>>,
    Path(id): Path<RecordId>,
) -> Result<StatusCode, ApiError>
where
    R: Resource,
    S: ResourceStore<R>,
{
    svc.delete(id).await?;
    Ok(StatusCode::OK)
}
