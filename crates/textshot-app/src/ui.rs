use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use textshot_config::Config;
use textshot_types::AppEvent;
use tokio::sync::RwLock;

/// Collaborator surface for the viewer window.
///
/// Widget construction lives outside the core; this loop is the narrow
/// interface the coordinator talks to. It renders notifications and, in a
/// toolkit build, would forward button presses and resize events through
/// `ui_to_app_tx`.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    _ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let (width, height) = {
        let config = config.read().await;
        (config.ui.initial_width, config.ui.initial_height)
    };
    tracing::info!("viewer surface ready ({width}x{height})");

    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::SetBusy(busy) => {
                tracing::debug!("busy cursor {}", if busy { "on" } else { "off" });
            }
            AppEvent::HideWindow => tracing::debug!("window hidden for selection"),
            AppEvent::RestoreWindow => tracing::debug!("window restored"),
            AppEvent::ShowError(message) => tracing::error!("{message}"),
            AppEvent::ShowInfo(message) => tracing::info!("{message}"),
            AppEvent::Published {
                width,
                height,
                text,
            } => {
                tracing::info!("{width} x {height} px, {} chars extracted", text.chars().count());
            }
            AppEvent::EngineStatus { engine, state } => {
                tracing::info!("engine {engine}: {state}");
            }
            AppEvent::Close => break,
            // requests flow the other way
            _ => {}
        }
    }

    Ok(())
}
