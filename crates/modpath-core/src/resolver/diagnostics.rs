//! Advisory diagnostics emitted during resolution.
//!
//! Warnings never abort a resolution. The sink is injected through
//! [`super::ResolveContext`] so callers decide where warnings go.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// Warning codes used by resolver diagnostics.
pub mod warning_codes {
    /// An alias produced a package specifier the probe could not find.
    pub const UNRESOLVED_ALIAS_TARGET: &str = "unresolved_alias_target";
}

/// Warning generated during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveWarning {
    /// Warning code (see [`warning_codes`])
    pub code: &'static str,
    /// The specifier that could not be found
    pub specifier: String,
    /// The file containing the import
    pub importer: PathBuf,
}

impl ResolveWarning {
    /// Warning for an alias target that does not exist.
    pub fn unresolved_alias_target(
        specifier: impl Into<String>,
        importer: impl Into<PathBuf>,
    ) -> Self {
        Self {
            code: warning_codes::UNRESOLVED_ALIAS_TARGET,
            specifier: specifier.into(),
            importer: importer.into(),
        }
    }
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not resolve module `{}` imported from `{}`",
            self.specifier,
            self.importer.display()
        )
    }
}

/// Receiver of resolution warnings.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, warning: ResolveWarning);
}

/// Sink that forwards warnings to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, warning: ResolveWarning) {
        tracing::warn!(
            code = warning.code,
            specifier = %warning.specifier,
            importer = %warning.importer.display(),
            "{warning}"
        );
    }
}

/// Sink that drops every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _warning: ResolveWarning) {}
}

/// Sink that keeps warnings in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<ResolveWarning>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings collected so far.
    #[must_use]
    pub fn warnings(&self) -> Vec<ResolveWarning> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the collected warnings.
    pub fn take(&self) -> Vec<ResolveWarning> {
        std::mem::take(&mut *self.warnings.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl DiagnosticSink for CollectingSink {
    fn warn(&self, warning: ResolveWarning) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning);
    }
}
