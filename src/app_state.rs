use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<RwLock<Settings>>,
}

impl AppState {
    pub fn new(settings: Arc<RwLock<Settings>>) -> Self {
        Self { settings }
    }
}
