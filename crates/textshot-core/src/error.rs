use textshot_types::EngineId;
use thiserror::Error;

/// Failures while obtaining an image from the screen or a file
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("no supported screenshot tool found")]
    NoToolAvailable,
    #[error("screenshot was not captured")]
    EmptyCapture,
    #[error("selected area is too small")]
    SelectionTooSmall,
    #[error("failed to decode image: {0}")]
    DecodeError(String),
}

/// Failures while bringing an engine to the ready state
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineInitError {
    #[error("OCR runtime is not installed or not configured: {0}")]
    ToolNotConfigured(String),
    #[error("optional component is not installed: {0}")]
    ComponentNotInstalled(String),
    #[error("failed to initialize engine: {0}")]
    Init(String),
}

/// Failures during a recognition pass
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecognizeError {
    #[error("engine {0} is not ready")]
    EngineUnavailable(EngineId),
    #[error("unknown engine {0}")]
    UnknownEngine(EngineId),
    #[error("recognition failed: {0}")]
    Recognition(String),
}
