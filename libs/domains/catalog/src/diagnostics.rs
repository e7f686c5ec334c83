//! Diagnostics port for the catalog service
//!
//! The service reports lookup misses through [`CatalogDiagnostics`] instead of
//! calling a logger directly, so callers decide where those reports go.

use std::sync::Mutex;

use crate::models::LookupKind;

pub trait CatalogDiagnostics: Send + Sync {
    /// A point or filtered lookup matched nothing
    fn product_not_found(&self, kind: LookupKind, key: &str);
}

/// Sends diagnostics to `tracing` at warn level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl CatalogDiagnostics for TracingDiagnostics {
    fn product_not_found(&self, kind: LookupKind, key: &str) {
        tracing::warn!(lookup = %kind, key, "Product not found");
    }
}

/// Keeps every report in memory
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    misses: Mutex<Vec<(LookupKind, String)>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Misses reported so far, oldest first
    pub fn misses(&self) -> Vec<(LookupKind, String)> {
        self.misses
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl CatalogDiagnostics for RecordingDiagnostics {
    fn product_not_found(&self, kind: LookupKind, key: &str) {
        if let Ok(mut misses) = self.misses.lock() {
            misses.push((kind, key.to_string()));
        }
    }
}
