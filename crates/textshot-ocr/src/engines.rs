use std::fs;
use std::path::{Path, PathBuf};

use image::ExtendedColorType;
use textshot_core::error::RecognizeError;
use textshot_types::CapturedImage;

pub mod fast;
pub mod general;
pub mod math;

pub use fast::FastPassEngine;
pub use general::GeneralEngine;
pub use math::MathEngine;

/// A decodable on-disk path for engines that consume files.
///
/// Uses the image's own source path when it still exists; otherwise stages
/// the pixels as a temp PNG that is removed when the input is dropped,
/// whatever the recognition outcome.
pub(crate) struct EngineInput {
    path: PathBuf,
    _temp: Option<TempInput>,
}

impl EngineInput {
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

struct TempInput(PathBuf);

impl Drop for TempInput {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

pub(crate) fn ensure_on_disk(image: &CapturedImage) -> Result<EngineInput, RecognizeError> {
    if let Some(path) = &image.path
        && path.exists()
    {
        return Ok(EngineInput {
            path: path.clone(),
            _temp: None,
        });
    }

    let path = std::env::temp_dir().join("textshot-engine-input.png");
    image::save_buffer(
        &path,
        &image.rgba,
        image.width,
        image.height,
        ExtendedColorType::Rgba8,
    )
    .map_err(|e| RecognizeError::Recognition(format!("failed to stage image: {e}")))?;

    Ok(EngineInput {
        path: path.clone(),
        _temp: Some(TempInput(path)),
    })
}

#[cfg(test)]
mod tests {
    use textshot_types::ImageOrigin;

    use super::*;

    fn in_memory_image() -> CapturedImage {
        CapturedImage::from_rgba(4, 4, vec![255; 4 * 4 * 4], None, ImageOrigin::ScreenCapture)
            .unwrap()
    }

    #[test]
    fn stages_in_memory_image_and_cleans_up() {
        let staged_path = {
            let input = ensure_on_disk(&in_memory_image()).unwrap();
            assert!(input.path().exists());
            input.path().to_path_buf()
        };
        assert!(!staged_path.exists());
    }

    #[test]
    fn prefers_existing_source_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.png");
        image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let image = CapturedImage::from_rgba(
            4,
            4,
            vec![0; 4 * 4 * 4],
            Some(path.clone()),
            ImageOrigin::OpenedFile,
        )
        .unwrap();

        let input = ensure_on_disk(&image).unwrap();
        assert_eq!(input.path(), path.as_path());
        drop(input);
        // the caller's file is never removed
        assert!(path.exists());
    }
}
