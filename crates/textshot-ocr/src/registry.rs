use std::collections::HashMap;
use std::sync::Arc;

use textshot_config::ocr::OcrConfig;
use textshot_core::error::{EngineInitError, RecognizeError};
use textshot_types::{CapturedImage, EngineId, EngineState, RecognitionOutput};
use tokio::sync::Mutex;

use crate::engines::{FastPassEngine, GeneralEngine, MathEngine};
use crate::OcrBackend;

/// Blocking constructor for one backend; runs on a worker thread
pub type BackendFactory =
    Arc<dyn Fn() -> Result<Box<dyn OcrBackend>, EngineInitError> + Send + Sync>;

struct EngineSlot {
    factory: BackendFactory,
    /// Serializes initialization per engine and memoizes the backend;
    /// a ready engine is never re-initialized.
    backend: Mutex<Option<Arc<dyn OcrBackend>>>,
    state: Mutex<EngineState>,
}

/// The set of supported engines with their lazy-initialization state.
///
/// Multiple engines may be ready at the same time; switching the active
/// engine never discards another engine's state.
pub struct EngineRegistry {
    slots: HashMap<EngineId, EngineSlot>,
}

impl EngineRegistry {
    pub fn new(factories: HashMap<EngineId, BackendFactory>) -> Self {
        let slots = factories
            .into_iter()
            .map(|(id, factory)| {
                (
                    id,
                    EngineSlot {
                        factory,
                        backend: Mutex::new(None),
                        state: Mutex::new(EngineState::Uninitialized),
                    },
                )
            })
            .collect();
        Self { slots }
    }

    /// Registry over the real backends, one factory per engine
    pub fn with_defaults(cfg: &OcrConfig) -> Self {
        let mut factories: HashMap<EngineId, BackendFactory> = HashMap::new();

        let language = cfg.language.clone();
        factories.insert(
            EngineId::General,
            Arc::new(move || {
                GeneralEngine::probe(&language).map(|e| Box::new(e) as Box<dyn OcrBackend>)
            }),
        );

        let language = cfg.language.clone();
        factories.insert(
            EngineId::FastPass,
            Arc::new(move || {
                FastPassEngine::probe(&language).map(|e| Box::new(e) as Box<dyn OcrBackend>)
            }),
        );

        factories.insert(
            EngineId::Math,
            Arc::new(|| MathEngine::probe().map(|e| Box::new(e) as Box<dyn OcrBackend>)),
        );

        Self::new(factories)
    }

    /// Current lifecycle state of one engine, for display
    pub async fn state(&self, id: EngineId) -> EngineState {
        match self.slots.get(&id) {
            Some(slot) => slot.state.lock().await.clone(),
            None => EngineState::Uninitialized,
        }
    }

    /// Bring an engine to the ready state, loading it on first use.
    ///
    /// Idempotent: a ready engine returns immediately. Initialization is
    /// serialized per engine, so concurrent calls cannot race duplicate
    /// loads. A failed init is retried on the next explicit attempt.
    pub async fn ensure_ready(&self, id: EngineId) -> Result<(), EngineInitError> {
        let slot = self
            .slots
            .get(&id)
            .ok_or_else(|| EngineInitError::Init(format!("unknown engine {id}")))?;

        let mut backend = slot.backend.lock().await;
        if backend.is_some() {
            return Ok(());
        }

        *slot.state.lock().await = EngineState::Initializing;
        tracing::info!("initializing OCR engine {id}");

        let factory = slot.factory.clone();
        let result = tokio::task::spawn_blocking(move || factory())
            .await
            .map_err(|e| EngineInitError::Init(format!("initialization task failed: {e}")))?;

        match result {
            Ok(engine) => {
                *backend = Some(Arc::from(engine));
                *slot.state.lock().await = EngineState::Ready;
                tracing::info!("OCR engine {id} ready");
                Ok(())
            }
            Err(e) => {
                *slot.state.lock().await = EngineState::FailedInit(e.to_string());
                tracing::error!("OCR engine {id} failed to initialize: {e}");
                Err(e)
            }
        }
    }

    /// Run one recognition pass on a worker thread
    pub async fn recognize(
        &self,
        id: EngineId,
        image: &CapturedImage,
    ) -> Result<RecognitionOutput, RecognizeError> {
        let slot = self
            .slots
            .get(&id)
            .ok_or(RecognizeError::UnknownEngine(id))?;

        let backend = slot
            .backend
            .lock()
            .await
            .clone()
            .ok_or(RecognizeError::EngineUnavailable(id))?;

        let image = image.clone();
        tokio::task::spawn_blocking(move || backend.recognize(&image))
            .await
            .map_err(|e| RecognizeError::Recognition(format!("recognition task failed: {e}")))?
    }
}
