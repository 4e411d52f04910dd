//! The resolution chain: ordered strategies, first hit wins.

use super::alias::resolve_from_alias;
use super::classify::is_relative_path;
use super::diagnostics::{DiagnosticSink, TracingSink};
use super::image::resolve_from_root_image;
use super::probe::{ModuleProbe, NodeProbe};
use super::root::resolve_from_root;
use crate::config::ResolverSettings;
use crate::error::Result;
use crate::options::ResolutionOptions;
use modpath_util::path::absolutize;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, trace};

/// Which step produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Relative specifier returned unchanged.
    Relative,
    Alias,
    Root,
    RootImageScale,
}

impl Strategy {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Alias => "alias",
            Self::Root => "root",
            Self::RootImageScale => "root_image_scale",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving one specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A module-relative specifier (POSIX separators) or a package name.
    Resolved { specifier: String, strategy: Strategy },
    /// No strategy produced a result. Whether that is an error is up to the caller.
    Unresolved,
}

impl Resolution {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    #[must_use]
    pub fn specifier(&self) -> Option<&str> {
        match self {
            Self::Resolved { specifier, .. } => Some(specifier),
            Self::Unresolved => None,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> Option<Strategy> {
        match self {
            Self::Resolved { strategy, .. } => Some(*strategy),
            Self::Unresolved => None,
        }
    }

    #[must_use]
    pub fn into_specifier(self) -> Option<String> {
        match self {
            Self::Resolved { specifier, .. } => Some(specifier),
            Self::Unresolved => None,
        }
    }
}

/// Capabilities and options for a resolution call.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    /// Normalized options.
    pub options: &'a ResolutionOptions,
    /// Filesystem probe.
    pub probe: &'a dyn ModuleProbe,
    /// Receiver of advisory warnings.
    pub diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> ResolveContext<'a> {
    pub fn new(
        options: &'a ResolutionOptions,
        probe: &'a dyn ModuleProbe,
        diagnostics: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            options,
            probe,
            diagnostics,
        }
    }
}

impl fmt::Debug for ResolveContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveContext")
            .field("options", self.options)
            .finish_non_exhaustive()
    }
}

type StrategyFn = fn(&ResolveContext<'_>, &str, &Path) -> Option<String>;

/// Strategies in priority order.
const STRATEGIES: &[(Strategy, StrategyFn)] = &[
    (Strategy::Alias, resolve_from_alias as StrategyFn),
    (Strategy::Root, resolve_from_root as StrategyFn),
    (Strategy::RootImageScale, resolve_from_root_image as StrategyFn),
];

/// Resolve `spec` as imported by `current_file`.
///
/// `current_file` may be relative to the process working directory.
#[must_use]
pub fn resolve_path(ctx: &ResolveContext<'_>, spec: &str, current_file: &Path) -> Resolution {
    if is_relative_path(spec) {
        return Resolution::Resolved {
            specifier: spec.to_string(),
            strategy: Strategy::Relative,
        };
    }

    let process_cwd = std::env::current_dir().unwrap_or_default();
    let current_file = absolutize(&process_cwd, current_file);

    for (strategy, run) in STRATEGIES {
        if let Some(specifier) = run(ctx, spec, &current_file) {
            debug!(spec, resolved = %specifier, %strategy, "resolved import");
            return Resolution::Resolved {
                specifier,
                strategy: *strategy,
            };
        }
        trace!(spec, %strategy, "strategy missed");
    }

    debug!(spec, file = %current_file.display(), "import unresolved");
    Resolution::Unresolved
}

/// Normalize `settings` for `current_file` and resolve with the filesystem
/// probe, reporting warnings through `tracing`.
pub fn resolve(spec: &str, current_file: &Path, settings: &ResolverSettings) -> Result<Resolution> {
    if is_relative_path(spec) {
        return Ok(Resolution::Resolved {
            specifier: spec.to_string(),
            strategy: Strategy::Relative,
        });
    }

    let options = ResolutionOptions::normalize(settings, current_file)?;
    let ctx = ResolveContext::new(&options, &NodeProbe, &TracingSink);
    Ok(resolve_path(&ctx, spec, current_file))
}
