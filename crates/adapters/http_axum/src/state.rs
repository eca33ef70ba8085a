//! Shared application state for axum handlers.

use std::sync::Arc;

use confadapt_app::buffer_pool::BufferPool;
use confadapt_app::services::adapt_service::AdaptService;

/// Application state shared across all axum handlers.
///
/// Cloning only clones the `Arc` wrappers.
#[derive(Clone)]
pub struct AppState {
    /// Content-type dispatcher over the adapter registry.
    pub adapt_service: Arc<AdaptService>,
    /// Reusable buffers for request bodies.
    pub buffers: Arc<BufferPool>,
    /// Largest request body accepted, in bytes.
    pub max_body_size: usize,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(adapt_service: AdaptService, buffers: BufferPool, max_body_size: usize) -> Self {
        Self {
            adapt_service: Arc::new(adapt_service),
            buffers: Arc::new(buffers),
            max_body_size,
        }
    }
}
