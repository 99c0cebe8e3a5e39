pub mod types;

pub use types::{
    AppEvent, CaptureRegion, CapturedImage, EngineId, EngineState, ImageOrigin, RecognitionOutput,
    RecognitionResult,
};
