use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::contact::sink::ContactSink;
use crate::content::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Renders hold the read guard for one pass; the content API takes the write guard.
    pub store: Arc<RwLock<ContentStore>>,
    pub config: Arc<Config>,
    /// Where accepted contact messages go. Default: DiscardSink.
    pub contact_sink: Arc<dyn ContactSink>,
}

impl AppState {
    pub fn new(store: ContentStore, config: Config, contact_sink: Arc<dyn ContactSink>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
            contact_sink,
        }
    }
}
