use serde::{Deserialize, Serialize};
use textshot_types::CaptureRegion;

fn default_min_selection() -> u32 {
    10
}

fn default_temp_file_name() -> String {
    "textshot-capture.png".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CaptureConfig {
    /// Selections smaller than this on either axis are treated as cancelled
    #[serde(default = "default_min_selection")]
    pub min_selection_px: u32,
    /// Fixed file name in the platform temp dir, one capture at a time
    #[serde(default = "default_temp_file_name")]
    pub temp_file_name: String,
    /// Pre-selected rectangle for the native grab path
    pub preferred_region: Option<CaptureRegion>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            min_selection_px: default_min_selection(),
            temp_file_name: default_temp_file_name(),
            preferred_region: None,
        }
    }
}
