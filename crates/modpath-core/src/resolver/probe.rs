//! Filesystem probe: does a module exist for this specifier, and where.
//!
//! Follows Node conventions:
//! - exact file, then the specifier with each extension appended
//! - directories via `package.json` `main`, then `index.*`
//! - a specifier ending in `/`, `.` or `..` names a directory only
//! - bare specifiers via `node_modules` lookup walking up from the base

use super::classify::{classify, SpecifierKind};
use modpath_util::path::absolutize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Module existence probe.
///
/// Implementations must be synchronous and free of observable side effects.
pub trait ModuleProbe: Send + Sync {
    /// Absolute path of the module `specifier` names relative to `basedir`,
    /// trying `extensions` in order, or `None` when nothing matches.
    fn resolve(&self, specifier: &str, basedir: &Path, extensions: &[String]) -> Option<PathBuf>;
}

/// Probe backed by the real filesystem.
///
/// Symlinks are preserved: the returned path is lexically normalized, not
/// canonicalized, so it stays comparable with the importing file's path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeProbe;

impl ModuleProbe for NodeProbe {
    fn resolve(&self, specifier: &str, basedir: &Path, extensions: &[String]) -> Option<PathBuf> {
        if specifier.is_empty() {
            return None;
        }

        let directory_only = names_directory(specifier);
        match classify(specifier) {
            SpecifierKind::Bare if !matches!(specifier, "." | "..") => {
                resolve_bare(specifier, basedir, extensions, directory_only)
            }
            _ => resolve_path(
                &absolutize(basedir, Path::new(specifier)),
                extensions,
                directory_only,
            ),
        }
    }
}

/// Whether `specifier` can only name a directory.
///
/// Path cleaning drops a trailing `/`, so this is decided on the raw text.
fn names_directory(specifier: &str) -> bool {
    matches!(specifier, "." | "..")
        || specifier.ends_with('/')
        || specifier.ends_with("/.")
        || specifier.ends_with("/..")
}

/// Resolve a path as a file, then as a directory.
fn resolve_path(base: &Path, extensions: &[String], directory_only: bool) -> Option<PathBuf> {
    if directory_only {
        return resolve_directory(base, extensions);
    }
    resolve_file(base, extensions).or_else(|| resolve_directory(base, extensions))
}

/// Try the exact path, then each extension appended.
fn resolve_file(base: &Path, extensions: &[String]) -> Option<PathBuf> {
    if base.is_file() {
        return Some(base.to_path_buf());
    }

    extensions
        .iter()
        .map(|ext| with_appended_extension(base, ext))
        .find(|candidate| candidate.is_file())
}

/// Resolve a directory (package.json main > index.*).
fn resolve_directory(dir: &Path, extensions: &[String]) -> Option<PathBuf> {
    if !dir.is_dir() {
        return None;
    }

    let pkg_json_path = dir.join("package.json");
    if let Some(main) = read_package_main(&pkg_json_path) {
        let main_path = absolutize(dir, Path::new(&main));
        let found = resolve_file(&main_path, extensions).or_else(|| {
            if main_path.is_dir() {
                resolve_index(&main_path, extensions)
            } else {
                None
            }
        });
        if found.is_some() {
            return found;
        }
    }

    resolve_index(dir, extensions)
}

fn resolve_index(dir: &Path, extensions: &[String]) -> Option<PathBuf> {
    extensions
        .iter()
        .map(|ext| dir.join(format!("index{ext}")))
        .find(|index| index.is_file())
}

/// Resolve a bare specifier via `node_modules`.
fn resolve_bare(
    spec: &str,
    basedir: &Path,
    extensions: &[String],
    directory_only: bool,
) -> Option<PathBuf> {
    let mut current = Some(basedir);

    while let Some(dir) = current {
        let node_modules = dir.join("node_modules");

        if node_modules.is_dir() {
            let candidate = node_modules.join(spec);
            if let Some(found) = resolve_path(&candidate, extensions, directory_only) {
                return Some(found);
            }
        }

        // Walk up
        current = dir.parent();
    }

    None
}

/// Read the `main` field of a package.json, if any.
fn read_package_main(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let value: Value = serde_json::from_str(&content).ok()?;
    value.get("main")?.as_str().map(str::to_string)
}

/// `format` + `.js` -> `format.js`; unlike `with_extension`, never replaces
/// an existing dotted suffix such as `lib.v2`.
fn with_appended_extension(base: &Path, ext: &str) -> PathBuf {
    let mut s = base.as_os_str().to_os_string();
    s.push(ext);
    PathBuf::from(s)
}
