use std::sync::Arc;

use textshot_config::Config;
use textshot_io::SystemClipboard;
use textshot_types::AppEvent;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod pipeline;
mod state;
mod status;
mod ui;

#[cfg(test)]
mod tests;

use controller::AppController;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::new();
    tracing::info!(
        "starting with engine {}, language {}",
        config.ocr.default_engine,
        config.ocr.language
    );

    let (width, height) = (config.ui.initial_width, config.ui.initial_height);
    let state = Arc::new(AppState::new(config));

    let controller = AppController::new(state);
    let requests = controller.request_sender();
    let mut tasks = controller.spawn_tasks(Arc::new(SystemClipboard));

    // seed the viewer with the initial window geometry
    requests
        .send(AppEvent::ViewportResized { width, height })
        .await?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            controller.shutdown();
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
            controller.shutdown();
        }
    }

    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("task error during shutdown: {e:#}");
        }
    }

    Ok(())
}
