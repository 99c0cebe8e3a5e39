use std::path::PathBuf;

use crate::pipeline::PipelineContext;

/// Save the currently displayed image to a user-chosen path
pub async fn handle_save_image(ctx: &PipelineContext, path: PathBuf) -> anyhow::Result<()> {
    let image = ctx.state.viewer.lock().await.image().clone();

    let target = path.clone();
    let result = tokio::task::spawn_blocking(move || textshot_capture::save_image(&image, &target))
        .await?;

    match result {
        Ok(()) => {
            ctx.notify_info(format!("Image saved to {}", path.display()))
                .await;
        }
        Err(e) => {
            ctx.notify_error(format!("failed to save image: {e}")).await;
        }
    }

    Ok(())
}
