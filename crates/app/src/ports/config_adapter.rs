//! Config adapter port — conversion of a configuration document into
//! canonical JSON.

use confadapt_domain::adaptation::Adaptation;
use confadapt_domain::error::AdapterError;

/// Free-form options forwarded to an adapter.
pub type AdapterOptions = serde_json::Map<String, serde_json::Value>;

/// Converts a configuration document in some format into canonical JSON.
///
/// Implementations live outside this workspace and are registered by name in
/// an [`AdapterRegistry`](crate::registry::AdapterRegistry) at startup.
/// Adapters are shared across concurrent requests, hence `Send + Sync`.
pub trait ConfigAdapter: Send + Sync {
    /// Adapt `body`, returning the canonical JSON and any warnings.
    ///
    /// # Errors
    ///
    /// Returns an [`AdapterError`] when the document cannot be converted.
    fn adapt(&self, body: &[u8], options: &AdapterOptions) -> Result<Adaptation, AdapterError>;
}

impl<F> ConfigAdapter for F
where
    F: Fn(&[u8], &AdapterOptions) -> Result<Adaptation, AdapterError> + Send + Sync,
{
    fn adapt(&self, body: &[u8], options: &AdapterOptions) -> Result<Adaptation, AdapterError> {
        self(body, options)
    }
}
