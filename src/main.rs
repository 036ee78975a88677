//! askql - natural-language to SQL HTTP service.

mod cli;
mod config;
mod db;
mod error;
mod llm;
mod normalize;
mod server;

use cli::Cli;
use db::Executor;
use error::{AskqlError, Result};
use llm::SqlGenerator;
use server::AppState;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = cli.to_config()?;

    info!("Database: {}", config.database_path.display());
    let executor = Executor::new(&config.database_path);

    if cli.seed {
        let inserted = db::seed_students(&executor).await?;
        info!("Seeded STUDENT table with {inserted} rows");
    }

    let generator = SqlGenerator::from_config(&config.llm)?;
    if !generator.is_enabled() {
        warn!("No LLM credential configured; /nl2sql and /ask will return errors");
    }

    let state = AppState::new(executor, generator);
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .map_err(|e| {
            AskqlError::config(format!("failed to bind {}: {e}", config.listen_addr))
        })?;
    info!("Listening on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AskqlError::internal(format!("server error: {e}")))
}
