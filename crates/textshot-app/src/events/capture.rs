use crate::pipeline::{self, CaptureSource, PipelineContext};

/// Grab a user-selected screen region and run it through the pipeline
pub async fn handle_capture(ctx: &PipelineContext) -> anyhow::Result<()> {
    let cfg = {
        let config = ctx.state.config.read().await;
        config.capture.clone()
    };

    pipeline::run(ctx, CaptureSource::Screen, move || {
        let (image, temp) = textshot_capture::capture_region(&cfg)?;
        Ok((image, Some(temp)))
    })
    .await
}
