use crate::auth::{AccessGate, SharedSecretGate};
use crate::config::AppConfig;
use crate::models::TrackerData;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub gate: Arc<dyn AccessGate>,
    pub data: Arc<Mutex<TrackerData>>,
}

impl AppState {
    pub fn new(config: AppConfig, data: TrackerData) -> Self {
        let gate: Arc<dyn AccessGate> = Arc::new(SharedSecretGate::new(config.access_key.clone()));
        Self {
            config: Arc::new(config),
            gate,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
