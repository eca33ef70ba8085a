//! Adapter registry — named config adapters, populated once at startup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::ports::ConfigAdapter;

/// Errors raised while registering adapters.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("adapter name must not be empty")]
    EmptyName,
    #[error("adapter name '{0}' must not contain '/'")]
    InvalidName(String),
    #[error("adapter named '{0}' already registered")]
    Duplicate(String),
}

/// Maps adapter names (the media subtype, e.g. `yaml`) to adapters.
///
/// The composition root registers every adapter before routing begins and
/// then shares the registry read-only.
#[derive(Clone, Default)]
pub struct AdapterRegistry {
    adapters: HashMap<String, Arc<dyn ConfigAdapter>>,
}

impl AdapterRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `adapter` under `name`.
    ///
    /// Names are matched against lowercased media subtypes, so they are
    /// stored lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the name is empty, contains a `/`, or is
    /// already taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        adapter: impl ConfigAdapter + 'static,
    ) -> Result<(), RegistryError> {
        let name = name.into().to_ascii_lowercase();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if name.contains('/') {
            return Err(RegistryError::InvalidName(name));
        }
        if self.adapters.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        tracing::debug!(adapter = %name, "registered config adapter");
        self.adapters.insert(name, Arc::new(adapter));
        Ok(())
    }

    /// Look up an adapter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn ConfigAdapter> {
        self.adapters.get(name).map(|adapter| &**adapter)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.adapters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("adapters", &self.names())
            .finish()
    }
}
