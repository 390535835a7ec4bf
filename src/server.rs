//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring and the Axum server lifecycle.

use crate::application::services::{
    ArticleService, AuthService, CourseService, JwtSettings, UniversityService,
};
use crate::config::Config;
use crate::domain::repositories::{
    ArticleRepository, CourseRepository, UniversityRepository, UserRepository,
};
use crate::infrastructure::persistence::{
    PgArticleRepository, PgCourseRepository, PgUniversityRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the connection pool with the configured limits.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Wires repositories and services over `pool` into the shared handler state.
pub fn build_state(pool: PgPool, config: &Config) -> AppState {
    let timeouts = config.query_timeouts();
    let pool_arc = Arc::new(pool.clone());

    let course_repository: Arc<dyn CourseRepository> = Arc::new(
        PgCourseRepository::with_timeouts(pool_arc.clone(), timeouts),
    );
    let article_repository: Arc<dyn ArticleRepository> = Arc::new(
        PgArticleRepository::with_timeouts(pool_arc.clone(), timeouts),
    );
    let university_repository: Arc<dyn UniversityRepository> = Arc::new(
        PgUniversityRepository::with_timeouts(pool_arc.clone(), timeouts),
    );
    let user_repository: Arc<dyn UserRepository> =
        Arc::new(PgUserRepository::with_timeouts(pool_arc, timeouts));

    let jwt = JwtSettings {
        secret: config.jwt_secret.clone(),
        issuer: config.jwt_issuer.clone(),
        ttl: chrono::Duration::hours(config.jwt_ttl_hours),
    };

    AppState {
        course_service: Arc::new(CourseService::new(course_repository)),
        article_service: Arc::new(ArticleService::new(article_repository)),
        university_service: Arc::new(UniversityService::new(university_repository)),
        auth_service: Arc::new(AuthService::new(user_repository, jwt)),
        health: Arc::new(pool),
        request_policy: config.request_policy(),
        environment: config.environment.clone(),
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Services and shared state
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;
    tracing::info!("Migrations applied");

    let state = build_state(pool, &config);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
