use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG`; defaults to `info` when it is unset or unparsable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a bounded connection pool using the connection string and pool limits from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date before
/// any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool limits
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .acquire_timeout(config.database_acquire_timeout)
        .idle_timeout(config.database_idle_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!(
        "Connected to database (max {} connections)",
        config.database_max_connections
    );

    Ok(db)
}

/// Creates the session store in the application database and the cookie layer over it.
///
/// Sessions expire after the same period of inactivity as a token's lifetime. In
/// production the cookie is `Secure` and `SameSite=None` so a separately hosted frontend
/// can send it; otherwise it is `SameSite=Lax` over plain HTTP.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let same_site = if config.production {
        SameSite::None
    } else {
        SameSite::Lax
    };
    let inactivity = time::Duration::seconds(
        i64::try_from(config.jwt_expiration.as_secs()).unwrap_or(i64::MAX),
    );

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(config.production)
        .with_same_site(same_site)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(inactivity)))
}

/// Builds the CORS layer.
///
/// With `CORS_ORIGIN` set, only that origin is allowed and credentials (the session cookie)
/// may be sent. Without it any origin is allowed and cookies are not shared.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let Some(origin) = config.cors_origin.as_deref() else {
        return Ok(cors.allow_origin(Any));
    };

    let origin = origin.parse::<HeaderValue>().map_err(|_| {
        ConfigError::InvalidEnvVar("CORS_ORIGIN".to_string(), origin.to_string())
    })?;

    Ok(cors.allow_origin(origin).allow_credentials(true))
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
