use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

use textshot_config::capture::CaptureConfig;
use textshot_core::error::CaptureError;
use textshot_types::{CaptureRegion, CapturedImage, ImageOrigin};

use crate::temp::TempCapture;

/// One external screenshot tool; the output path is appended as the last argument
#[derive(Debug, Clone, Copy)]
pub struct CaptureTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

/// Interactive region-select tools tried in priority order
const LINUX_TOOLS: &[CaptureTool] = &[
    CaptureTool {
        program: "gnome-screenshot",
        args: &["-a", "-f"],
    },
    CaptureTool {
        program: "maim",
        args: &["-s"],
    },
    CaptureTool {
        program: "import",
        args: &[],
    },
    CaptureTool {
        program: "scrot",
        args: &["-s"],
    },
];

const MACOS_TOOLS: &[CaptureTool] = &[CaptureTool {
    program: "screencapture",
    args: &["-i"],
}];

/// Grab a user-selected screen region into a validated image.
///
/// Tries the platform's capture mechanisms in order; the first success wins.
/// The returned [`TempCapture`] owns the on-disk file and must outlive any
/// engine that reads the image by path.
pub fn capture_region(cfg: &CaptureConfig) -> Result<(CapturedImage, TempCapture), CaptureError> {
    let temp = TempCapture::new(&cfg.temp_file_name);

    match env::consts::OS {
        "linux" => run_tools(LINUX_TOOLS, temp.path())?,
        "macos" => run_tools(MACOS_TOOLS, temp.path())?,
        "windows" => grab_native(cfg.preferred_region, temp.path())?,
        other => {
            tracing::warn!("unsupported operating system for capture: {other}");
            return Err(CaptureError::NoToolAvailable);
        }
    }

    let image = load_validated(temp.path(), cfg.min_selection_px)?;
    Ok((image, temp))
}

/// Run each tool until one exits successfully; spawn failures and nonzero
/// exits fall through to the next candidate.
pub fn run_tools(tools: &[CaptureTool], out: &Path) -> Result<(), CaptureError> {
    for tool in tools {
        match Command::new(tool.program).args(tool.args).arg(out).status() {
            Ok(status) if status.success() => {
                tracing::debug!("captured with {}", tool.program);
                return Ok(());
            }
            Ok(status) => {
                tracing::debug!("{} exited with {status}, trying next tool", tool.program);
            }
            Err(e) => {
                tracing::debug!("{} not available: {e}", tool.program);
            }
        }
    }
    Err(CaptureError::NoToolAvailable)
}

/// Native grab through the platform screen-capture API, cropped to the
/// pre-selected region when one is known.
fn grab_native(region: Option<CaptureRegion>, out: &Path) -> Result<(), CaptureError> {
    let monitors = xcap::Monitor::all().map_err(|e| {
        tracing::warn!("screen grab unavailable: {e}");
        CaptureError::NoToolAvailable
    })?;

    let monitor = match region {
        Some(r) => monitors
            .iter()
            .find(|m| {
                r.x >= m.x()
                    && r.y >= m.y()
                    && r.x + r.width as i32 <= m.x() + m.width() as i32
                    && r.y + r.height as i32 <= m.y() + m.height() as i32
            })
            .or(monitors.first()),
        None => monitors.first(),
    }
    .ok_or(CaptureError::NoToolAvailable)?;

    let image = monitor
        .capture_image()
        .map_err(|e| CaptureError::DecodeError(e.to_string()))?;

    let image = match region {
        Some(r) => xcap::image::imageops::crop_imm(
            &image,
            (r.x - monitor.x()) as u32,
            (r.y - monitor.y()) as u32,
            r.width,
            r.height,
        )
        .to_image(),
        None => image,
    };

    image
        .save(out)
        .map_err(|e| CaptureError::DecodeError(e.to_string()))
}

/// Decode and validate a capture output file
fn load_validated(path: &Path, min_px: u32) -> Result<CapturedImage, CaptureError> {
    match fs::metadata(path) {
        Ok(meta) if meta.len() > 0 => {}
        _ => return Err(CaptureError::EmptyCapture),
    }

    let decoded = image::open(path)
        .map_err(|e| CaptureError::DecodeError(e.to_string()))?
        .to_rgba8();

    let (width, height) = decoded.dimensions();
    if width < min_px || height < min_px {
        return Err(CaptureError::SelectionTooSmall);
    }

    CapturedImage::from_rgba(
        width,
        height,
        decoded.into_raw(),
        Some(path.to_path_buf()),
        ImageOrigin::ScreenCapture,
    )
    .ok_or(CaptureError::EmptyCapture)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn missing_tools_exhaust_to_no_tool_available() {
        let tools = [
            CaptureTool {
                program: "textshot-test-no-such-tool-a",
                args: &["-s"],
            },
            CaptureTool {
                program: "textshot-test-no-such-tool-b",
                args: &[],
            },
        ];
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("shot.png");
        assert_eq!(
            run_tools(&tools, &out),
            Err(CaptureError::NoToolAvailable)
        );
    }

    #[test]
    fn empty_tool_list_is_no_tool_available() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("shot.png");
        assert_eq!(run_tools(&[], &out), Err(CaptureError::NoToolAvailable));
    }

    #[test]
    fn missing_output_is_empty_capture() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("never-written.png");
        assert_eq!(
            load_validated(&out, 10),
            Err(CaptureError::EmptyCapture)
        );
    }

    #[test]
    fn zero_byte_output_is_empty_capture() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.png");
        fs::write(&out, b"").unwrap();
        assert_eq!(load_validated(&out, 10), Err(CaptureError::EmptyCapture));
    }

    #[test]
    fn undecodable_output_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("garbage.png");
        fs::write(&out, b"not a png at all").unwrap();
        assert!(matches!(
            load_validated(&out, 10),
            Err(CaptureError::DecodeError(_))
        ));
    }

    #[test]
    fn sub_minimum_selection_is_too_small() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tiny.png");
        write_png(&out, 4, 4);
        assert_eq!(
            load_validated(&out, 10),
            Err(CaptureError::SelectionTooSmall)
        );
    }

    #[test]
    fn valid_capture_keeps_path_and_origin() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("ok.png");
        write_png(&out, 32, 24);
        let image = load_validated(&out, 10).unwrap();
        assert_eq!((image.width, image.height), (32, 24));
        assert_eq!(image.origin, ImageOrigin::ScreenCapture);
        assert_eq!(image.path.as_deref(), Some(out.as_path()));
    }
}
