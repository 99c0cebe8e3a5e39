use textshot_types::{AppEvent, EngineId};

use crate::pipeline::{BusyGuard, PipelineContext};

/// Make a different engine active and warm it up in the background.
///
/// The previous engine keeps whatever state it has; switching back later
/// costs nothing. Readiness is checked off the event loop so the surface
/// stays responsive; a pipeline run issued meanwhile waits on the same
/// per-engine initialization lock inside the registry.
pub async fn handle_engine_switch(ctx: &PipelineContext, engine: EngineId) -> anyhow::Result<()> {
    {
        let mut active = ctx.state.active_engine.lock().await;
        if *active == engine {
            return Ok(());
        }
        *active = engine;
    }

    ctx.notify_info(format!("Changed to {}", engine.description()))
        .await;

    let state = ctx.state.clone();
    let tx = ctx.app_to_ui_tx.clone();
    tokio::spawn(async move {
        let _busy = BusyGuard::engage(&tx);

        if let Err(e) = state.registry.ensure_ready(engine).await {
            let _ = tx
                .send(AppEvent::ShowError(format!(
                    "engine {engine} failed to initialize: {e}"
                )))
                .await;
        }

        let _ = tx
            .send(AppEvent::EngineStatus {
                engine,
                state: state.registry.state(engine).await,
            })
            .await;
    });

    Ok(())
}
