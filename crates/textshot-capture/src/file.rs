use std::path::Path;

use anyhow::{Context, bail};
use image::{ExtendedColorType, RgbaImage};
use textshot_core::error::CaptureError;
use textshot_types::{CapturedImage, ImageOrigin};

/// Decode a user-chosen image file (png, jpg/jpeg, bmp, gif, tiff)
pub fn open_file(path: &Path) -> Result<CapturedImage, CaptureError> {
    let decoded = image::open(path)
        .map_err(|e| CaptureError::DecodeError(e.to_string()))?
        .to_rgba8();

    let (width, height) = decoded.dimensions();
    CapturedImage::from_rgba(
        width,
        height,
        decoded.into_raw(),
        Some(path.to_path_buf()),
        ImageOrigin::OpenedFile,
    )
    .ok_or_else(|| CaptureError::DecodeError("image has no pixels".to_string()))
}

/// Save the displayed image to a user-chosen path; format follows the extension
pub fn save_image(image: &CapturedImage, path: &Path) -> anyhow::Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" | "bmp" => {
            image::save_buffer(
                path,
                &image.rgba,
                image.width,
                image.height,
                ExtendedColorType::Rgba8,
            )
            .with_context(|| format!("failed to save image to {path:?}"))?;
        }
        "jpg" | "jpeg" => {
            // the jpeg encoder has no alpha channel
            let rgba = RgbaImage::from_raw(image.width, image.height, image.rgba.clone())
                .context("image buffer does not match its dimensions")?;
            let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
            rgb.save(path)
                .with_context(|| format!("failed to save image to {path:?}"))?;
        }
        other => bail!("unsupported save format: {other:?} (use png, jpg or bmp)"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> CapturedImage {
        CapturedImage::from_rgba(
            8,
            6,
            vec![200; 8 * 6 * 4],
            None,
            ImageOrigin::ScreenCapture,
        )
        .unwrap()
    }

    #[test]
    fn open_decodes_png_with_file_origin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        image::RgbaImage::from_pixel(5, 7, image::Rgba([1, 2, 3, 255]))
            .save(&path)
            .unwrap();

        let image = open_file(&path).unwrap();
        assert_eq!((image.width, image.height), (5, 7));
        assert_eq!(image.origin, ImageOrigin::OpenedFile);
    }

    #[test]
    fn open_rejects_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"\x00\x01").unwrap();
        assert!(matches!(open_file(&path), Err(CaptureError::DecodeError(_))));
    }

    #[test]
    fn save_roundtrips_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        save_image(&sample_image(), &path).unwrap();
        let reopened = open_file(&path).unwrap();
        assert_eq!((reopened.width, reopened.height), (8, 6));
    }

    #[test]
    fn save_converts_for_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        save_image(&sample_image(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.webp");
        assert!(save_image(&sample_image(), &path).is_err());
    }
}
