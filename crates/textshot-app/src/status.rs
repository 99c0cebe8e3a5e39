use tokio::sync::RwLock;

/// Where the coordinator currently is in the capture/recognize cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PipelinePhase {
    #[default]
    Idle,
    Capturing,
    Recognizing,
}

#[derive(Clone, Debug, Default)]
pub struct PipelineStatus {
    pub phase: PipelinePhase,
    pub run_count: u64,
    pub error_count: u64,
    pub last_error: Option<String>,
}

/// Application status, readable for display at any time
pub struct AppStatus {
    pipeline: RwLock<PipelineStatus>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            pipeline: RwLock::new(PipelineStatus::default()),
        }
    }

    pub async fn snapshot(&self) -> PipelineStatus {
        self.pipeline.read().await.clone()
    }

    pub async fn set_phase(&self, phase: PipelinePhase) {
        self.pipeline.write().await.phase = phase;
    }

    pub async fn record_run(&self) {
        self.pipeline.write().await.run_count += 1;
    }

    pub async fn record_error(&self, detail: &str) {
        let mut status = self.pipeline.write().await;
        status.error_count += 1;
        status.last_error = Some(detail.to_string());
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}
