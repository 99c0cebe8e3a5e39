use std::path::PathBuf;

use crate::pipeline::{self, CaptureSource, PipelineContext};

/// Run an image chosen from disk through the pipeline
pub async fn handle_open_file(ctx: &PipelineContext, path: PathBuf) -> anyhow::Result<()> {
    pipeline::run(ctx, CaptureSource::File, move || {
        let image = textshot_capture::open_file(&path)?;
        Ok((image, None))
    })
    .await
}
