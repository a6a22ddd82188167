use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::{Author, Book, ResourceStore, User};

use crate::state::AppServices;

pub mod resources;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health plus one CRUD root per resource kind
pub fn build_router<A, B, U>(services: AppServices<A, B, U>, cors: CorsLayer) -> Router
where
    A: ResourceStore<Author> + 'static,
    B: ResourceStore<Book> + 'static,
    U: ResourceStore<User> + 'static,
{
    let AppServices { authors, books, users } = services;

    Router::new()
        .route("/health", get(health))
        .merge(resources::resource_router(authors))
        .merge(resources::resource_router(books))
        .merge(resources::resource_router(users))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
