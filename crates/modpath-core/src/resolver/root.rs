//! Root strategy: look the specifier up under each root directory in order.

use super::chain::ResolveContext;
use super::normalize::module_relative_path;
use std::path::{Path, PathBuf};

/// First file matching `spec` under the configured roots.
fn find_in_roots(ctx: &ResolveContext<'_>, spec: &str) -> Option<PathBuf> {
    if spec.is_empty() {
        return None;
    }
    let local = format!("./{spec}");

    ctx.options
        .root
        .iter()
        .find_map(|basedir| ctx.probe.resolve(&local, basedir, &ctx.options.extensions))
}

/// Resolve `spec` against the root directories.
pub(super) fn resolve_from_root(
    ctx: &ResolveContext<'_>,
    spec: &str,
    current_file: &Path,
) -> Option<String> {
    let resolved = find_in_roots(ctx, spec)?;
    Some(module_relative_path(
        spec,
        current_file,
        &resolved,
        ctx.options,
    ))
}
