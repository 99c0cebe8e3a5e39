use std::process::Command;

use textshot_core::error::{EngineInitError, RecognizeError};
use textshot_types::{CapturedImage, RecognitionOutput};

use super::ensure_on_disk;
use crate::OcrBackend;

/// Structured recognition for mathematical notation via the optional
/// `pix2tex` component. Returns a single markup string, no joining needed.
pub struct MathEngine;

impl MathEngine {
    pub fn probe() -> Result<Self, EngineInitError> {
        Command::new("pix2tex").arg("--help").output().map_err(|e| {
            EngineInitError::ComponentNotInstalled(format!(
                "pix2tex is not installed (pip install pix2tex): {e}"
            ))
        })?;

        Ok(Self)
    }
}

impl OcrBackend for MathEngine {
    fn recognize(&self, image: &CapturedImage) -> Result<RecognitionOutput, RecognizeError> {
        let input = ensure_on_disk(image)?;

        let output = Command::new("pix2tex")
            .arg(input.path())
            .output()
            .map_err(|e| RecognizeError::Recognition(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecognizeError::Recognition(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(RecognitionOutput::Markup(strip_path_prefix(&stdout)))
    }
}

/// pix2tex echoes the input path before the markup: `<path>: <latex>`
fn strip_path_prefix(stdout: &str) -> String {
    let line = stdout.trim();
    match line.split_once(": ") {
        Some((_, markup)) => markup.to_string(),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_echoed_input_path() {
        assert_eq!(
            strip_path_prefix("/tmp/shot.png: \\frac{a}{b}\n"),
            "\\frac{a}{b}"
        );
    }

    #[test]
    fn keeps_bare_markup() {
        assert_eq!(strip_path_prefix("x^2\n"), "x^2");
    }
}
