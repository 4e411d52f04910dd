//! Raw resolver settings as written in a config file.
//!
//! These are the user-facing knobs. They are turned into
//! [`crate::options::ResolutionOptions`] once per resolution call, because the
//! working directory may depend on the importing file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Extensions probed when the settings do not list any.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".es", ".es6", ".mjs"];

/// Image extensions eligible for scaled-variant lookup by default.
pub const DEFAULT_IMAGE_TYPES: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".webp"];

/// Density suffixes tried, in order, by default.
pub const DEFAULT_IMAGE_SCALE: &[&str] = &["@2x", "@3x"];

/// Environment variable consulted by [`Mode::from_env`].
pub const MODE_ENV: &str = "NODE_ENV";

/// Raw settings for the resolver.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverSettings {
    /// Base directory for relative computations. Defaults to the process cwd.
    pub cwd: Option<CwdSetting>,

    /// Root directories (or glob patterns) searched in order.
    pub root: Vec<String>,

    /// Alias rules, pattern to substitution, in declaration order.
    pub alias: Map<String, Value>,

    /// Extensions probed in order.
    pub extensions: Option<Vec<String>>,

    /// Extensions removed from a resolved path when the specifier's own
    /// extension differs from the file's. Defaults to `extensions`.
    pub strip_extensions: Option<Vec<String>>,

    /// Extensions treated as images.
    pub image_types: Option<Vec<String>>,

    /// Density suffixes tried for images.
    pub image_scale: Option<Vec<String>>,
}

impl ResolverSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Add a root directory.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root.push(root.into());
        self
    }

    /// Add an alias rule after the existing ones.
    #[must_use]
    pub fn with_alias(
        mut self,
        pattern: impl Into<String>,
        substitution: impl Into<String>,
    ) -> Self {
        self.alias
            .insert(pattern.into(), Value::String(substitution.into()));
        self
    }

    /// Set the working directory.
    #[must_use]
    pub fn with_cwd(mut self, cwd: CwdSetting) -> Self {
        self.cwd = Some(cwd);
        self
    }

    /// Set the probed extensions.
    #[must_use]
    pub fn with_extensions<S: Into<String>>(
        mut self,
        extensions: impl IntoIterator<Item = S>,
    ) -> Self {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }
}

/// How the working directory is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CwdSetting {
    /// A fixed directory; relative values are taken from the process cwd.
    Directory(PathBuf),
    /// The directory of the nearest `package.json` above the importing file.
    PackageJson,
}

impl CwdSetting {
    const PACKAGE_JSON: &'static str = "packagejson";
}

impl From<String> for CwdSetting {
    fn from(value: String) -> Self {
        if value == Self::PACKAGE_JSON {
            Self::PackageJson
        } else {
            Self::Directory(PathBuf::from(value))
        }
    }
}

/// Execution mode. Alias existence checks only run outside production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    /// Detect the mode from `NODE_ENV`.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(MODE_ENV) {
            Ok(value) if value == "production" => Self::Production,
            _ => Self::Development,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}
