//! Import specifier resolution through alias rules and root directories.
//!
//! Relative specifiers pass through untouched. Everything else goes through
//! an ordered chain of strategies (alias, root, scaled image) and the first
//! hit wins. A miss of every strategy is reported as
//! [`Resolution::Unresolved`], never as an error.

mod alias;
mod chain;
pub mod classify;
pub mod diagnostics;
mod image;
pub mod normalize;
pub mod probe;
mod root;
#[cfg(all(test, unix))]
mod test_support;

pub use chain::{resolve, resolve_path, Resolution, ResolveContext, Strategy};
pub use classify::{classify, is_relative_path, SpecifierKind};
pub use diagnostics::{
    warning_codes, CollectingSink, DiagnosticSink, NullSink, ResolveWarning, TracingSink,
};
pub use probe::{ModuleProbe, NodeProbe};
