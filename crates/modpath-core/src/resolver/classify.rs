//! Specifier classification.

/// Shape of an import specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    /// Starts with `./` or `../`.
    Relative,
    /// Filesystem-absolute (`/x`, `C:\x`, `\\server\share`).
    Absolute,
    /// Package-style or aliased (`lodash`, `utils/format`).
    Bare,
}

/// True iff `spec` starts with `./` or `../`.
///
/// This is a string check only; the filesystem is never consulted.
#[must_use]
pub fn is_relative_path(spec: &str) -> bool {
    spec.starts_with("./") || spec.starts_with("../")
}

/// Classify a specifier.
#[must_use]
pub fn classify(spec: &str) -> SpecifierKind {
    if is_relative_path(spec) {
        SpecifierKind::Relative
    } else if is_absolute_path(spec) {
        SpecifierKind::Absolute
    } else {
        SpecifierKind::Bare
    }
}

/// Check if a specifier is an absolute path.
fn is_absolute_path(spec: &str) -> bool {
    // Unix absolute
    if spec.starts_with('/') {
        return true;
    }

    // Windows absolute: C:\, D:\, etc.
    let bytes = spec.as_bytes();
    if bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'\\' || bytes[2] == b'/')
    {
        return true;
    }

    // UNC path: \\server\share
    spec.starts_with("\\\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative() {
        assert!(is_relative_path("./a"));
        assert!(is_relative_path("../a"));
        assert!(is_relative_path("../../a/b.js"));
        assert!(!is_relative_path("a"));
        assert!(!is_relative_path("."));
        assert!(!is_relative_path(".."));
        assert!(!is_relative_path(".env"));
        assert!(!is_relative_path("/abs"));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("./utils"), SpecifierKind::Relative);
        assert_eq!(classify("/usr/lib/x.js"), SpecifierKind::Absolute);
        assert_eq!(classify("C:\\proj\\x.js"), SpecifierKind::Absolute);
        assert_eq!(classify("\\\\server\\share"), SpecifierKind::Absolute);
        assert_eq!(classify("utils/format"), SpecifierKind::Bare);
        assert_eq!(classify("@scope/pkg"), SpecifierKind::Bare);
    }
}
