use serde::{Deserialize, Serialize};
use textshot_types::EngineId;

fn default_engine() -> EngineId {
    EngineId::General
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    #[serde(default = "default_engine")]
    pub default_engine: EngineId,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            default_engine: default_engine(),
            language: default_language(),
        }
    }
}
