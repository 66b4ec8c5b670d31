mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, router::router, startup, state::AppState,
    view::EmbeddedDataRenderer,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;

    let state = AppState::new(db.clone(), Arc::new(EmbeddedDataRenderer));

    let app = router(state, &config.static_dir)
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    if let Err(e) = db.close().await {
        tracing::warn!("Failed to close database pool: {}", e);
    }

    tracing::info!("Server stopped");

    Ok(())
}
