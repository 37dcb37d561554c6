//! Validation settings.
//!
//! [`ValidationConfig`] is fixed when the registry is built (see
//! [`SchemaRegistryBuilder::with_config`](crate::schema::SchemaRegistryBuilder::with_config))
//! and applies to every validation pass run through that registry.

use std::thread;

/// Upper bound on worker threads for concurrent validation.
const MAX_DEFAULT_THREADS: usize = 8;

/// Settings for validation passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Report keys a record does not declare as errors. When false they are
    /// reported as warnings and the operation may proceed.
    pub reject_unknown_attributes: bool,

    /// Worker threads used by concurrent validation. Zero is treated as one.
    pub max_threads: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let available = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            reject_unknown_attributes: true,
            max_threads: available.min(MAX_DEFAULT_THREADS),
        }
    }
}

impl ValidationConfig {
    pub fn with_reject_unknown_attributes(mut self, reject: bool) -> Self {
        self.reject_unknown_attributes = reject;
        self
    }

    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = max_threads;
        self
    }

    /// Thread count actually used, never zero.
    pub fn effective_threads(&self) -> usize {
        self.max_threads.max(1)
    }
}
