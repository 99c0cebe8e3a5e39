use std::process::Command;

use textshot_core::error::{EngineInitError, RecognizeError};
use textshot_types::{CapturedImage, RecognitionOutput};

use super::ensure_on_disk;
use crate::OcrBackend;

/// General-purpose engine over the `easyocr` command line.
///
/// The heavyweight model load happens on the first real invocation, which is
/// why the registry initializes this engine off the interactive surface.
pub struct GeneralEngine {
    language: String,
}

impl GeneralEngine {
    pub fn probe(language: &str) -> Result<Self, EngineInitError> {
        let output = Command::new("easyocr")
            .arg("--help")
            .output()
            .map_err(|e| EngineInitError::Init(format!("easyocr is not available: {e}")))?;

        if !output.status.success() {
            return Err(EngineInitError::Init(
                "easyocr probe exited with an error".to_string(),
            ));
        }

        Ok(Self {
            language: language.to_string(),
        })
    }
}

impl OcrBackend for GeneralEngine {
    fn recognize(&self, image: &CapturedImage) -> Result<RecognitionOutput, RecognizeError> {
        let input = ensure_on_disk(image)?;

        let output = Command::new("easyocr")
            .args(["-l", &self.language, "--detail", "0", "--paragraph", "False"])
            .arg("-f")
            .arg(input.path())
            .output()
            .map_err(|e| RecognizeError::Recognition(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecognizeError::Recognition(stderr.trim().to_string()));
        }

        // one detected block per line; zero blocks is an empty list, not an error
        let blocks = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|line| line.trim_end().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        Ok(RecognitionOutput::Blocks(blocks))
    }
}
