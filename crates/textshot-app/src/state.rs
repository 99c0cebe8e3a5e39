use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use textshot_config::Config;
use textshot_core::presentation::Viewer;
use textshot_ocr::EngineRegistry;
use textshot_types::EngineId;
use tokio::sync::{Mutex, RwLock};

use crate::status::AppStatus;

/// Session state owned by the coordinator; components receive it by
/// reference instead of reaching for globals.
pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub registry: EngineRegistry,
    /// Published (image, text) pair and its viewport-derived bitmap
    pub viewer: Mutex<Viewer>,
    pub active_engine: Mutex<EngineId>,
    /// Single-flight flag: only one capture-or-recognize run at a time
    pub pipeline_active: AtomicBool,
    pub status: AppStatus,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let registry = EngineRegistry::with_defaults(&config.ocr);
        Self::with_registry(config, registry)
    }

    /// Construction seam for tests that script the engine backends
    pub fn with_registry(config: Config, registry: EngineRegistry) -> Self {
        let active_engine = config.ocr.default_engine;
        Self {
            config: Arc::new(RwLock::new(config)),
            registry,
            viewer: Mutex::new(Viewer::new()),
            active_engine: Mutex::new(active_engine),
            pipeline_active: AtomicBool::new(false),
            status: AppStatus::new(),
        }
    }
}
