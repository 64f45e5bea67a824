//! Student service binary: reads config from env, bootstraps the database, serves the REST API.

use std::sync::Arc;
use student_service::{
    app_router, connect_pool, ensure_database_exists, ensure_students_table, AppState,
    PgStudentRepository, RandomEnrollmentCodes, ServiceConfig,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("student_service=info,tower_http=info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;

    if config.bootstrap_schema {
        ensure_database_exists(&config.database_url).await?;
    }
    let pool = match connect_pool(&config.database_url, &config.pool).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "cannot open database pool");
            return Err(e.into());
        }
    };
    if config.bootstrap_schema {
        ensure_students_table(&pool).await?;
    }

    let repo = PgStudentRepository::new(pool.clone(), Arc::new(RandomEnrollmentCodes::new()));
    let state = AppState::new(Arc::new(repo), config.greeting.as_str());
    let app = app_router(state, config.max_body_bytes);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
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
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
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
