//! Turning a resolved file into a module-relative specifier.

use crate::options::ResolutionOptions;
use modpath_util::path::{
    absolutize, extension, path_extension, relative_path, split_file_name, to_local, to_posix,
};
use std::path::Path;

/// POSIX path from the importing file's directory to `target`.
///
/// A relative `target` is taken from `cwd`. The result carries no `./`
/// prefix; see [`to_local`].
#[must_use]
pub fn relative_to_importer(cwd: &Path, current_file: &Path, target: &Path) -> String {
    let from = current_file.parent().unwrap_or(current_file);
    let to = absolutize(cwd, target);
    to_posix(&relative_path(from, &to).to_string_lossy())
}

/// Remove the first matching extension from the final segment.
#[must_use]
pub fn strip_extension(spec: &str, strip_extensions: &[String]) -> String {
    let (dir, name) = split_file_name(spec);
    let name = strip_extensions
        .iter()
        .find_map(|ext| name.strip_suffix(ext.as_str()))
        .unwrap_or(name);

    match dir {
        Some(dir) => format!("{dir}/{name}"),
        None => name.to_string(),
    }
}

/// Module-relative specifier for `resolved`, as imported by `current_file`.
///
/// When the file's real extension differs from the one written in `spec`,
/// the result has its extension stripped per `strip_extensions`, so
/// `utils/format` resolving to `format.js` stays extensionless.
#[must_use]
pub fn module_relative_path(
    spec: &str,
    current_file: &Path,
    resolved: &Path,
    options: &ResolutionOptions,
) -> String {
    let mut relative = relative_to_importer(&options.cwd, current_file, resolved);

    if path_extension(resolved) != extension(spec) {
        relative = strip_extension(&relative, &options.strip_extensions);
    }

    to_local(&relative)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_to_importer_absolute_target() {
        let rel = relative_to_importer(
            Path::new("/anything"),
            Path::new("/proj/src/app/index.js"),
            Path::new("/proj/src/utils/format.js"),
        );
        assert_eq!(rel, "../utils/format.js");
    }

    #[test]
    fn test_relative_to_importer_cwd_relative_target() {
        let rel = relative_to_importer(
            Path::new("/proj"),
            Path::new("/proj/src/app/index.js"),
            Path::new("./vendor/math"),
        );
        assert_eq!(rel, "../../vendor/math");
    }

    #[test]
    fn test_strip_extension() {
        let exts = vec![".js".to_string(), ".jsx".to_string()];
        assert_eq!(strip_extension("../utils/format.js", &exts), "../utils/format");
        assert_eq!(strip_extension("format.jsx", &exts), "format");
        assert_eq!(strip_extension("format.css", &exts), "format.css");
    }

    #[test]
    fn test_strip_extension_first_match_wins() {
        let exts = vec![".js".to_string(), ".min.js".to_string()];
        assert_eq!(strip_extension("lib/x.min.js", &exts), "lib/x.min");
    }

    #[test]
    fn test_module_relative_path_strips_probed_extension() {
        let opts = ResolutionOptions::new("/proj").with_extensions([".js"]);
        let rel = module_relative_path(
            "utils/format",
            Path::new("/proj/src/app/index.js"),
            &PathBuf::from("/proj/src/utils/format.js"),
            &opts,
        );
        assert_eq!(rel, "../utils/format");
    }

    #[test]
    fn test_module_relative_path_keeps_written_extension() {
        let opts = ResolutionOptions::new("/proj").with_extensions([".js"]);
        let rel = module_relative_path(
            "utils/format.js",
            Path::new("/proj/src/app/index.js"),
            &PathBuf::from("/proj/src/utils/format.js"),
            &opts,
        );
        assert_eq!(rel, "../utils/format.js");
    }

    #[test]
    fn test_module_relative_path_same_directory_gets_prefix() {
        let opts = ResolutionOptions::new("/proj").with_extensions([".js"]);
        let rel = module_relative_path(
            "format",
            Path::new("/proj/src/index.js"),
            &PathBuf::from("/proj/src/format.js"),
            &opts,
        );
        assert_eq!(rel, "./format");
    }

    #[test]
    fn test_module_relative_path_dotted_specifier() {
        let opts = ResolutionOptions::new("/proj").with_extensions([".js"]);
        let rel = module_relative_path(
            "config.dev",
            Path::new("/proj/src/index.js"),
            &PathBuf::from("/proj/src/config.dev.js"),
            &opts,
        );
        assert_eq!(rel, "./config.dev");
    }

    #[test]
    fn test_module_relative_path_index_file() {
        let opts = ResolutionOptions::new("/proj").with_extensions([".js"]);
        let rel = module_relative_path(
            "components",
            Path::new("/proj/src/app/index.js"),
            &PathBuf::from("/proj/src/components/index.js"),
            &opts,
        );
        assert_eq!(rel, "../components/index");
    }
}
