#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Shared utilities for modpath.
//!
//! This crate provides pure path helpers with no logging/tracing dependencies.
//! Logging is handled by the CLI crate to keep this library lightweight.

pub mod path;
