use crate::ledger::EditWindow;
use crate::models::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared service state. The single mutex over the snapshot serializes all
/// habit mutations, which is the per-habit write discipline the ledger
/// requires.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub window: EditWindow,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, window: EditWindow, data: AppData) -> Self {
        Self {
            data_path,
            window,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
