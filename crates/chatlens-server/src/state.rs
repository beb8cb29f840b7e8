use std::sync::Arc;

use chatlens_core::{Analyzer, DatasetIndex};

/// Shared application state accessible from all route handlers.
/// The index is read-only after load, so handlers share it lock-free.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<DatasetIndex>,
    pub analyzer: Arc<Analyzer>,
    /// Whether an API credential was configured at startup; false means
    /// every summary degrades.
    pub summarizer_configured: bool,
}
