use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use kanal::AsyncSender;
use textshot_capture::TempCapture;
use textshot_core::error::CaptureError;
use textshot_core::normalize;
use textshot_io::ClipboardSink;
use textshot_types::{AppEvent, CapturedImage};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;
use crate::status::PipelinePhase;

/// Shared dependencies for one pipeline run
#[derive(Clone)]
pub struct PipelineContext {
    pub state: Arc<AppState>,
    pub app_to_ui_tx: AsyncSender<AppEvent>,
    pub clipboard: Arc<dyn ClipboardSink>,
    pub cancel: CancellationToken,
}

impl PipelineContext {
    pub async fn notify_error(&self, message: String) {
        tracing::error!("{message}");
        self.state.status.record_error(&message).await;
        let _ = self.app_to_ui_tx.send(AppEvent::ShowError(message)).await;
    }

    pub async fn notify_info(&self, message: String) {
        tracing::info!("{message}");
        let _ = self.app_to_ui_tx.send(AppEvent::ShowInfo(message)).await;
    }
}

/// An acquired image plus the temp file backing it, when one exists.
/// The temp file must stay alive until recognition is done with the path.
pub type Acquired = (CapturedImage, Option<TempCapture>);

/// Whether acquisition needs the window out of the way
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    Screen,
    File,
}

/// One full capture -> recognize -> publish run.
///
/// The acquisition closure runs on a worker thread; everything that touches
/// the viewer happens back on this task. Failures at any stage report to the
/// UI and leave the previously published pair untouched.
pub async fn run<F>(ctx: &PipelineContext, source: CaptureSource, acquire: F) -> anyhow::Result<()>
where
    F: FnOnce() -> Result<Acquired, CaptureError> + Send + 'static,
{
    let Some(_flight) = FlightSlot::try_acquire(&ctx.state.pipeline_active) else {
        ctx.notify_info("a capture is already being processed".to_string())
            .await;
        return Ok(());
    };
    let _busy = BusyGuard::engage(&ctx.app_to_ui_tx);

    ctx.state.status.set_phase(PipelinePhase::Capturing).await;

    let outcome = {
        // restore is guaranteed on every exit path, including worker panics
        let _visibility = match source {
            CaptureSource::Screen => Some(VisibilityGuard::hide(&ctx.app_to_ui_tx)),
            CaptureSource::File => None,
        };
        tokio::task::spawn_blocking(acquire).await?
    };

    let (image, _temp) = match outcome {
        Ok(acquired) => acquired,
        Err(e) => {
            ctx.notify_error(format!("capture failed: {e}")).await;
            ctx.state.status.set_phase(PipelinePhase::Idle).await;
            return Ok(());
        }
    };

    recognize_and_publish(ctx, image).await;
    ctx.state.status.set_phase(PipelinePhase::Idle).await;
    Ok(())
}

async fn recognize_and_publish(ctx: &PipelineContext, image: CapturedImage) {
    if ctx.cancel.is_cancelled() {
        return;
    }
    let engine = *ctx.state.active_engine.lock().await;

    if let Err(e) = ctx.state.registry.ensure_ready(engine).await {
        // Policy: the captured image is still shown, with no text, so the
        // user sees what was grabbed even when the engine cannot load.
        publish(ctx, image, String::new()).await;
        ctx.notify_error(format!("engine {engine} failed to initialize: {e}"))
            .await;
        return;
    }

    if ctx.cancel.is_cancelled() {
        return;
    }
    ctx.state.status.set_phase(PipelinePhase::Recognizing).await;

    match ctx.state.registry.recognize(engine, &image).await {
        Ok(output) => {
            let text = normalize::normalize(output);
            let (width, height) = (image.width, image.height);
            publish(ctx, image, text.clone()).await;
            copy_to_clipboard(ctx, text.clone()).await;
            let _ = ctx
                .app_to_ui_tx
                .send(AppEvent::Published {
                    width,
                    height,
                    text,
                })
                .await;
            ctx.state.status.record_run().await;
        }
        Err(e) => {
            // the previously published (image, text) pair stays visible
            ctx.notify_error(format!("recognition failed: {e}")).await;
        }
    }
}

async fn publish(ctx: &PipelineContext, image: CapturedImage, text: String) {
    ctx.state.viewer.lock().await.publish(image, text);
}

/// Exactly one clipboard copy per successful run; a clipboard failure is
/// logged but never turns a successful recognition into an error.
async fn copy_to_clipboard(ctx: &PipelineContext, text: String) {
    let clipboard = ctx.clipboard.clone();
    let result = tokio::task::spawn_blocking(move || clipboard.set_text(&text)).await;
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!("failed to copy result to clipboard: {e}"),
        Err(e) => tracing::warn!("clipboard task failed: {e}"),
    }
}

/// Holds the single-flight slot; released on every exit path
struct FlightSlot<'a> {
    flag: &'a AtomicBool,
}

impl<'a> FlightSlot<'a> {
    fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for FlightSlot<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Busy-cursor signal to the UI collaborator, cleared on drop
pub(crate) struct BusyGuard {
    tx: AsyncSender<AppEvent>,
}

impl BusyGuard {
    pub(crate) fn engage(tx: &AsyncSender<AppEvent>) -> Self {
        let _ = tx.try_send(AppEvent::SetBusy(true));
        Self { tx: tx.clone() }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let _ = self.tx.try_send(AppEvent::SetBusy(false));
    }
}

/// Hides the window for an on-screen selection; restore happens on drop,
/// on success and failure paths alike
struct VisibilityGuard {
    tx: AsyncSender<AppEvent>,
}

impl VisibilityGuard {
    fn hide(tx: &AsyncSender<AppEvent>) -> Self {
        let _ = tx.try_send(AppEvent::HideWindow);
        Self { tx: tx.clone() }
    }
}

impl Drop for VisibilityGuard {
    fn drop(&mut self) {
        let _ = self.tx.try_send(AppEvent::RestoreWindow);
    }
}
