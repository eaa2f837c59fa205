//! Application state shared across routes

use std::sync::Arc;

use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::store::SnapshotStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub snapshots: Arc<SnapshotStore>,
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            snapshots: Arc::new(SnapshotStore::new()),
            dashboard: Arc::new(Dashboard::new()),
        }
    }
}
