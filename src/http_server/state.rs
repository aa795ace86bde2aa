//! Shared handler state

use std::sync::Arc;

use crate::observability::MetricsRegistry;
use crate::storage::{Storage, StorageError};

use super::errors::ApiError;

/// State injected into every route. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
    pub metrics: Arc<MetricsRegistry>,
}

impl AppState {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self {
            store,
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }

    /// Records a store failure and converts it to a generic 500
    pub fn internal(&self, message: &'static str, err: StorageError) -> ApiError {
        tracing::error!(error = %err, "{}", message);
        self.metrics.increment_internal_errors();
        ApiError::Internal(message)
    }
}
