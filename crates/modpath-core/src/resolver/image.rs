//! Scaled image strategy.
//!
//! `icon.png` may only exist on disk as `icon@2x.png` / `icon@3x.png`. The
//! bundler picks the density later, so this strategy only proves some scaled
//! variant exists under a root and hands back the unscaled name.

use super::chain::ResolveContext;
use super::root::resolve_from_root;
use modpath_util::path::{extension, file_stem, split_file_name};
use std::path::Path;

/// Resolve an image specifier through its scaled variants.
pub(super) fn resolve_from_root_image(
    ctx: &ResolveContext<'_>,
    spec: &str,
    current_file: &Path,
) -> Option<String> {
    let ext = extension(spec);
    if !ctx.options.image_types.iter().any(|t| t == ext) {
        return None;
    }

    let stem = file_stem(spec);
    let (dir, _) = split_file_name(spec);

    ctx.options.image_scale.iter().find_map(|scale| {
        let scaled_name = format!("{stem}{scale}{ext}");
        let scaled = match dir {
            Some(dir) => format!("{dir}/{scaled_name}"),
            None => scaled_name,
        };

        let relative = resolve_from_root(ctx, &scaled, current_file)?;
        let (resolved_dir, _) = split_file_name(&relative);
        Some(match resolved_dir {
            Some(resolved_dir) => format!("{resolved_dir}/{stem}{ext}"),
            None => format!("./{stem}{ext}"),
        })
    })
}
