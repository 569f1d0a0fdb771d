use fp_ai::{AiCollaborator, OpenAiClient};
use fp_server::{AppState, ServerErrorResult, build_router, logger};

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = fp_config::Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => Some(fp_config::Config::config_dir()?.join(filename)),
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fp-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&database_path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    fp_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    // AI collaborator
    let api_key = config.ai.api_key.clone().unwrap_or_else(|| {
        warn!("FP_AI_API_KEY is not set; AI features will fail with 502");
        String::new()
    });
    let ai: Arc<dyn AiCollaborator> = Arc::new(
        OpenAiClient::new(&config.ai.base_url, &api_key)
            .with_models(&config.ai.transcription_model, &config.ai.chat_model),
    );

    // Build application state and router
    let state = AppState::new(
        pool,
        ai,
        Duration::from_secs(config.ai.timeout_secs),
        config.uploads.max_bytes,
    );
    let app = build_router(state, &config.server.cors_origins);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
