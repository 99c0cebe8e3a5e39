mod engines;
mod registry;

use textshot_core::error::RecognizeError;
use textshot_types::{CapturedImage, RecognitionOutput};

pub use engines::{FastPassEngine, GeneralEngine, MathEngine};
pub use registry::{BackendFactory, EngineRegistry};

/// Uniform contract over the interchangeable OCR backends.
///
/// Each backend hides its own quirks (temp-file staging, external binaries,
/// single-string vs multi-block output) behind this seam. Recognition is
/// blocking and runs on a worker thread via the registry.
pub trait OcrBackend: Send + Sync {
    fn recognize(&self, image: &CapturedImage) -> Result<RecognitionOutput, RecognizeError>;
}
