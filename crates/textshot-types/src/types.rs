use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Screen rectangle selected for capture, in physical pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Where a captured image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    ScreenCapture,
    OpenedFile,
}

/// Pixel data produced by the capture provider, owned by the viewer until replaced
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedImage {
    pub width: u32,
    pub height: u32,
    /// 8-bit RGBA, row-major
    pub rgba: Vec<u8>,
    /// On-disk source, when one exists; engines may prefer a decodable path
    pub path: Option<PathBuf>,
    pub origin: ImageOrigin,
}

impl CapturedImage {
    pub fn from_rgba(
        width: u32,
        height: u32,
        rgba: Vec<u8>,
        path: Option<PathBuf>,
        origin: ImageOrigin,
    ) -> Option<Self> {
        if width == 0 || height == 0 || rgba.len() as u64 != width as u64 * height as u64 * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba,
            path,
            origin,
        })
    }

    /// 1x1 white image shown before the first capture
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255; 4],
            path: None,
            origin: ImageOrigin::OpenedFile,
        }
    }
}

/// The closed set of interchangeable OCR backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineId {
    /// General purpose, returns detected text blocks
    General,
    /// Single fast pass over the system OCR runtime
    FastPass,
    /// Structured output for mathematical notation
    Math,
}

impl EngineId {
    pub const ALL: [EngineId; 3] = [EngineId::General, EngineId::FastPass, EngineId::Math];

    /// Short user-facing description, shown when the active engine changes
    pub fn description(self) -> &'static str {
        match self {
            EngineId::General => "General purpose OCR with broad language support",
            EngineId::FastPass => "Fast OCR backed by the system Tesseract runtime",
            EngineId::Math => "Specialized recognition for mathematical notation",
        }
    }
}

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineId::General => write!(f, "general"),
            EngineId::FastPass => write!(f, "fastpass"),
            EngineId::Math => write!(f, "math"),
        }
    }
}

/// Per-engine lifecycle; transitions are serialized by the registry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Uninitialized,
    Initializing,
    Ready,
    FailedInit(String),
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineState::Uninitialized => write!(f, "uninitialized"),
            EngineState::Initializing => write!(f, "initializing"),
            EngineState::Ready => write!(f, "ready"),
            EngineState::FailedInit(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Native output shape of an engine, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutput {
    /// Detected text blocks in detection order
    Blocks(Vec<String>),
    /// One plain-text pass
    Plain(String),
    /// A single markup string
    Markup(String),
}

/// Normalized text for one pipeline run, consumed by the viewer and discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionResult {
    pub text: String,
    pub engine: EngineId,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    // ui -> app
    CaptureRequested,
    OpenFileRequested(PathBuf),
    SaveImageRequested(PathBuf),
    EngineSelected(EngineId),
    ViewportResized { width: u32, height: u32 },
    Close,

    // app -> ui
    SetBusy(bool),
    HideWindow,
    RestoreWindow,
    ShowError(String),
    ShowInfo(String),
    Published { width: u32, height: u32, text: String },
    EngineStatus { engine: EngineId, state: EngineState },
}
