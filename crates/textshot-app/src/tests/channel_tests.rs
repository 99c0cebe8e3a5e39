use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use textshot_config::Config;
use textshot_io::ClipboardSink;
use textshot_ocr::{BackendFactory, EngineRegistry};
use textshot_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

struct NullClipboard;

impl ClipboardSink for NullClipboard {
    fn set_text(&self, _text: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

fn empty_state() -> Arc<AppState> {
    let factories: HashMap<textshot_types::EngineId, BackendFactory> = HashMap::new();
    Arc::new(AppState::with_registry(
        Config::default(),
        EngineRegistry::new(factories),
    ))
}

// try_send must work from sync contexts, the drop guards depend on it
#[tokio::test]
async fn try_send_works_from_blocking_drop() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(16);

    struct Signal {
        tx: kanal::AsyncSender<AppEvent>,
    }
    impl Drop for Signal {
        fn drop(&mut self) {
            let _ = self.tx.try_send(AppEvent::SetBusy(false));
        }
    }

    tokio::task::spawn_blocking(move || {
        let _ = tx.try_send(AppEvent::SetBusy(true));
        let _signal = Signal { tx };
        // guard dropped here, off the runtime
    })
    .await
    .unwrap();

    assert!(matches!(rx.recv().await, Ok(AppEvent::SetBusy(true))));
    assert!(matches!(rx.recv().await, Ok(AppEvent::SetBusy(false))));
}

#[tokio::test]
async fn event_loop_stops_on_close() {
    let (ui_tx, ui_rx) = kanal::bounded_async(64);
    let (app_tx, _app_rx) = kanal::bounded_async(256);
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(event_loop(
        empty_state(),
        ui_rx,
        app_tx,
        Arc::new(NullClipboard),
        cancel,
    ));

    ui_tx.send(AppEvent::Close).await.unwrap();

    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("event loop should stop after Close")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn event_loop_stops_on_cancellation() {
    let (_ui_tx, ui_rx) = kanal::bounded_async::<AppEvent>(64);
    let (app_tx, _app_rx) = kanal::bounded_async(256);
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(event_loop(
        empty_state(),
        ui_rx,
        app_tx,
        Arc::new(NullClipboard),
        cancel.clone(),
    ));

    cancel.cancel();

    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("event loop should stop once cancelled")
        .unwrap()
        .unwrap();
}
