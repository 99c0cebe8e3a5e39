use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use textshot_io::ClipboardSink;
use textshot_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::pipeline::PipelineContext;
use crate::state::AppState;

pub mod capture;
pub mod open_file;
pub mod save_image;
pub mod switch_engine;

use capture::handle_capture;
use open_file::handle_open_file;
use save_image::handle_save_image;
use switch_engine::handle_engine_switch;

/// App's main loop: consumes requests from the interactive surface and
/// drives the capture/recognize pipeline
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    clipboard: Arc<dyn ClipboardSink>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let ctx = PipelineContext {
        state,
        app_to_ui_tx,
        clipboard,
        cancel: cancel.clone(),
    };

    tracing::info!("event loop started, waiting for requests");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!("handling {:?}", std::mem::discriminant(&event));
        if !handle_event(&ctx, event).await? {
            break;
        }
    }

    Ok(())
}

/// Returns false when the loop should stop
async fn handle_event(ctx: &PipelineContext, event: AppEvent) -> anyhow::Result<bool> {
    match event {
        AppEvent::CaptureRequested => {
            handle_capture(ctx).await?;
        }
        AppEvent::OpenFileRequested(path) => {
            handle_open_file(ctx, path).await?;
        }
        AppEvent::SaveImageRequested(path) => {
            handle_save_image(ctx, path).await?;
        }
        AppEvent::EngineSelected(engine) => {
            handle_engine_switch(ctx, engine).await?;
        }
        AppEvent::ViewportResized { width, height } => {
            ctx.state
                .viewer
                .lock()
                .await
                .on_viewport_resized(width, height);
        }
        AppEvent::Close => return Ok(false),
        // notifications flow the other way; the UI layer renders these
        AppEvent::SetBusy(_)
        | AppEvent::HideWindow
        | AppEvent::RestoreWindow
        | AppEvent::ShowError(_)
        | AppEvent::ShowInfo(_)
        | AppEvent::Published { .. }
        | AppEvent::EngineStatus { .. } => {}
    }

    Ok(true)
}
