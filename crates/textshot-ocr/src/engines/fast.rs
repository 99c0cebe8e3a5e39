use std::process::Command;

use textshot_core::error::{EngineInitError, RecognizeError};
use textshot_types::{CapturedImage, RecognitionOutput};

use super::ensure_on_disk;
use crate::OcrBackend;

/// Single fast pass over the system Tesseract runtime.
///
/// Unlike the general engine this one has no model of its own; it needs a
/// configured `tesseract` installation and fails distinctly when it is absent.
pub struct FastPassEngine {
    language: String,
}

impl FastPassEngine {
    pub fn probe(language: &str) -> Result<Self, EngineInitError> {
        let output = Command::new("tesseract")
            .arg("--version")
            .output()
            .map_err(|e| {
                EngineInitError::ToolNotConfigured(format!(
                    "tesseract is not installed or not on PATH: {e}"
                ))
            })?;

        if !output.status.success() {
            return Err(EngineInitError::ToolNotConfigured(
                "tesseract is installed but not working".to_string(),
            ));
        }

        Ok(Self {
            language: map_language(language),
        })
    }
}

/// Tesseract uses ISO 639-2 codes where the rest of the app uses two-letter tags
fn map_language(language: &str) -> String {
    match language {
        "en" => "eng".to_string(),
        "de" => "deu".to_string(),
        "fr" => "fra".to_string(),
        "ja" => "jpn".to_string(),
        other => other.to_string(),
    }
}

impl OcrBackend for FastPassEngine {
    fn recognize(&self, image: &CapturedImage) -> Result<RecognitionOutput, RecognizeError> {
        let input = ensure_on_disk(image)?;

        let output = Command::new("tesseract")
            .arg(input.path())
            .arg("stdout")
            .args(["-l", &self.language])
            .output()
            .map_err(|e| RecognizeError::Recognition(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecognizeError::Recognition(stderr.trim().to_string()));
        }

        Ok(RecognitionOutput::Plain(
            String::from_utf8_lossy(&output.stdout).into_owned(),
        ))
    }
}
