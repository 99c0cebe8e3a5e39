use std::env;

use serde::{Deserialize, Serialize};
use textshot_types::EngineId;

use self::capture::CaptureConfig;
use self::ocr::OcrConfig;
use self::ui::UiConfig;

pub mod capture;
pub mod ocr;
pub mod ui;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub capture: CaptureConfig,
    pub ocr: OcrConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();

        if let Ok(engine) = env::var("TEXTSHOT_ENGINE") {
            config.ocr.default_engine = match engine.to_lowercase().as_str() {
                "fastpass" => EngineId::FastPass,
                "math" => EngineId::Math,
                _ => EngineId::General,
            };
        }

        if let Ok(language) = env::var("TEXTSHOT_LANGUAGE") {
            config.ocr.language = language;
        }

        if let Ok(min) = env::var("TEXTSHOT_MIN_SELECTION")
            && let Ok(min) = min.parse()
        {
            config.capture.min_selection_px = min;
        }

        config
    }
}
