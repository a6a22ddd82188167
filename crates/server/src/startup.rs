use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::SeaOrmServices;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect the database, apply migrations and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = models::db::connect_and_migrate(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    let services = SeaOrmServices::seaorm(db);
    Ok(routes::build_router(services, build_cors()))
}

/// Bind the configured host/port; host names are resolved.
pub async fn bind(cfg: &AppConfig) -> Result<TcpListener, StartupError> {
    let addr = cfg.server.bind_addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {}: {}", addr, e)))
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let listener = bind(&cfg).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "library server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_config() -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        cfg.database.url = "sqlite::memory:".into();
        cfg
    }

    #[tokio::test]
    async fn build_app_against_sqlite() {
        assert!(build_app(&sqlite_config()).await.is_ok());
    }

    #[tokio::test]
    async fn bind_ephemeral_port() {
        let listener = bind(&sqlite_config()).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn bad_database_url_is_database_error() {
        let mut cfg = sqlite_config();
        cfg.database.url = "sqlite:///nonexistent-dir/sub/library.db".into();
        assert!(matches!(build_app(&cfg).await, Err(StartupError::Database(_))));
    }
}
