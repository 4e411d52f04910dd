#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]

//! Resolve non-relative import specifiers through alias rules and root
//! directories, producing paths an importing file can use as-is.

pub mod config;
pub mod error;
pub mod options;
pub mod resolver;
pub mod version;

pub use config::{CwdSetting, Mode, ResolverSettings};
pub use error::{Error, Result};
pub use options::{AliasRule, ResolutionOptions, Substitution};
pub use resolver::{
    resolve, resolve_path, CollectingSink, DiagnosticSink, ModuleProbe, NodeProbe, NullSink,
    Resolution, ResolveContext, ResolveWarning, Strategy, TracingSink,
};
pub use version::VERSION;
