//! Adaptation — the output of a config adapter.

use crate::warning::Warning;

/// Canonical JSON produced by a config adapter, with any warnings raised
/// along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adaptation {
    /// Canonical JSON bytes.
    pub config: Vec<u8>,
    /// Non-fatal diagnostics, in the order the adapter emitted them.
    pub warnings: Vec<Warning>,
}

impl Adaptation {
    /// Create an adaptation without warnings.
    #[must_use]
    pub fn new(config: impl Into<Vec<u8>>) -> Self {
        Self {
            config: config.into(),
            warnings: Vec::new(),
        }
    }

    /// Append a warning.
    #[must_use]
    pub fn with_warning(mut self, warning: Warning) -> Self {
        self.warnings.push(warning);
        self
    }
}
