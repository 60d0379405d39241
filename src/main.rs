mod model;
mod server;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, router, seed, service::auth::token::TokenService,
    startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    if std::env::args().nth(1).as_deref() == Some("seed") {
        let result = seed::seed(&db).await;
        db.close().await?;
        return result.map(|_| ());
    }

    let session = startup::connect_to_session(&db, &config).await?;
    let cors = startup::cors_layer(&config)?;
    let tokens = TokenService::new(&config.jwt_secret, config.jwt_expiration);

    let app = router::router()
        .with_state(AppState::new(db.clone(), tokens))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e))
        })?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    db.close().await?;
    tracing::info!("Database pool closed");

    Ok(())
}
