use std::sync::Arc;

use crate::config::Config;
use crate::db::SharedStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: SharedStore,
    pub config: Config,
}
