//! Alias strategy: rewrite the specifier through the first matching rule.

use super::chain::ResolveContext;
use super::classify::is_relative_path;
use super::diagnostics::ResolveWarning;
use super::normalize::relative_to_importer;
use modpath_util::path::to_local;
use std::path::Path;
use tracing::debug;

/// Resolve `spec` through the configured alias rules.
///
/// Only the first matching rule is applied. Later rules are never consulted,
/// even when the substituted package cannot be found.
pub(super) fn resolve_from_alias(
    ctx: &ResolveContext<'_>,
    spec: &str,
    current_file: &Path,
) -> Option<String> {
    let opts = ctx.options;

    let (index, aliased) = opts
        .alias
        .iter()
        .enumerate()
        .find_map(|(i, rule)| rule.apply(spec).map(|aliased| (i, aliased)))?;

    debug!(spec, rule = index, aliased = %aliased, "alias rule matched");

    if aliased.is_empty() {
        return None;
    }

    if is_relative_path(&aliased) {
        return Some(to_local(&relative_to_importer(
            &opts.cwd,
            current_file,
            Path::new(&aliased),
        )));
    }

    if !opts.mode.is_production() {
        let basedir = current_file.parent().unwrap_or(current_file);
        if ctx
            .probe
            .resolve(&aliased, basedir, &opts.extensions)
            .is_none()
        {
            ctx.diagnostics
                .warn(ResolveWarning::unresolved_alias_target(&aliased, current_file));
        }
    }

    Some(aliased)
}
