use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod state;
mod ui;


use crate::controller::AppController;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = lexi_config::Config::new();
    let state = Arc::new(AppState::new(config));

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            controller.shutdown();
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("core task exited"),
                Ok(Err(e)) => tracing::error!("core task failed: {e}"),
                Err(e) => tracing::error!("core task panicked: {e}"),
            }
        }
    }

    Ok(())
}
