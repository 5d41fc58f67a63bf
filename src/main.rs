//! WordBook server: loads `.env`, prepares the database, serves the word API.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use wordbook::{app_router, create_all, ensure_database_exists, AppState, Backend, DbPool, Settings, TABLES};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wordbook=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    if settings.backend == Backend::Postgres && settings.create_database {
        ensure_database_exists(&settings.database_url).await?;
    }
    let pool = DbPool::connect(&settings.database_url, settings.max_connections).await?;
    create_all(&pool, TABLES).await?;
    tracing::info!(backend = ?pool.backend(), "database ready");

    let app = app_router(AppState::new(pool.clone()));
    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
