use std::sync::Arc;

use crate::backend::AnalysisBackend;
use crate::config::Config;
use crate::dashboard::SessionStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub backend: Arc<dyn AnalysisBackend>,
    pub sessions: SessionStore,
}
