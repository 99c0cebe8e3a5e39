use serde::{Deserialize, Serialize};

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    700
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_width")]
    pub initial_width: u32,
    #[serde(default = "default_height")]
    pub initial_height: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_width: default_width(),
            initial_height: default_height(),
        }
    }
}
