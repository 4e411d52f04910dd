//! Path helpers shared by the resolver.
//!
//! Specifiers are plain strings with `/` separators, while filesystem paths use
//! the platform separator. Helpers that take `&str` work on specifiers; helpers
//! that take `&Path` work on the filesystem view.

use path_clean::PathClean;
use std::path::{Component, Path, PathBuf};

/// Convert all backslash separators to forward slashes.
#[must_use]
pub fn to_posix(path: &str) -> String {
    path.replace('\\', "/")
}

/// Prefix a specifier with `./` unless it already starts with `./` or `../`.
///
/// An empty input (the importing directory itself) becomes `./`.
#[must_use]
pub fn to_local(path: &str) -> String {
    if path.starts_with("./") || path.starts_with("../") {
        path.to_string()
    } else if path == "." || path.is_empty() {
        "./".to_string()
    } else if path == ".." {
        "../".to_string()
    } else {
        format!("./{path}")
    }
}

/// Make `path` absolute against `base` and lexically normalize it.
#[must_use]
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        base.join(path).clean()
    }
}

/// Lexical relative path from directory `from` to `to`.
///
/// Both inputs should be absolute. No filesystem access is performed, so
/// symlinks are not followed. Returns an empty path when both are equal.
#[must_use]
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from = from.clean();
    let to = to.clean();

    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..from_parts.len() {
        out.push("..");
    }
    for part in &to_parts[common..] {
        out.push(part.as_os_str());
    }
    out
}

/// Split a specifier into its directory part (if any) and final segment.
///
/// `"assets/icon.png"` -> `(Some("assets"), "icon.png")`, `"icon.png"` -> `(None, "icon.png")`.
#[must_use]
pub fn split_file_name(spec: &str) -> (Option<&str>, &str) {
    match spec.rfind(['/', '\\']) {
        Some(pos) => (Some(&spec[..pos]), &spec[pos + 1..]),
        None => (None, spec),
    }
}

/// Extension of the final segment of a specifier, including the leading dot.
///
/// Leading dots of the segment never start an extension, so `".babelrc"` has
/// none. Returns `""` when there is no extension.
#[must_use]
pub fn extension(spec: &str) -> &str {
    let (_, name) = split_file_name(spec);
    match name.rfind('.') {
        Some(pos) if !name[..pos].chars().all(|c| c == '.') => &name[pos..],
        _ => "",
    }
}

/// Final segment of a specifier with its extension removed.
#[must_use]
pub fn file_stem(spec: &str) -> &str {
    let (_, name) = split_file_name(spec);
    let ext = extension(name);
    &name[..name.len() - ext.len()]
}

/// Extension of a filesystem path in the same form as [`extension`].
#[must_use]
pub fn path_extension(path: &Path) -> String {
    path.file_name()
        .map(|name| extension(&name.to_string_lossy()).to_string())
        .unwrap_or_default()
}
