//! Normalized resolution options.
//!
//! [`ResolutionOptions`] is what the resolver chain reads. It is built per
//! resolution call, either from [`ResolverSettings`] via
//! [`ResolutionOptions::normalize`] or directly through the builder methods.

use crate::config::{
    CwdSetting, Mode, ResolverSettings, DEFAULT_EXTENSIONS, DEFAULT_IMAGE_SCALE,
    DEFAULT_IMAGE_TYPES,
};
use crate::error::{Error, Result};
use modpath_util::path::absolutize;
use regex_lite::{Captures, Regex};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Caller-supplied substitution computed from the alias match.
pub type SubstituteFn = dyn Fn(&Captures<'_>) -> String + Send + Sync;

/// How an alias match becomes a replacement specifier.
#[derive(Clone)]
pub enum Substitution {
    /// Expansion template. Capture groups are referenced as `$N` or `${N}`.
    Template(String),
    /// Arbitrary function of the captures.
    Function(Arc<SubstituteFn>),
}

impl Substitution {
    /// Build a template, accepting `\N` group references as well as `$N`
    /// and `${N}`.
    ///
    /// Any other `$` is literal text, so `./$src/\1` keeps its `$src`.
    #[must_use]
    pub fn template(value: &str) -> Self {
        let mut out = String::with_capacity(value.len());
        let mut chars = value.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' {
                match chars.peek() {
                    Some(d) if d.is_ascii_digit() || *d == '{' => out.push('$'),
                    Some('$') => {
                        out.push_str("$$");
                        chars.next();
                    }
                    _ => out.push_str("$$"),
                }
                continue;
            }
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some(d) if d.is_ascii_digit() => {
                    out.push_str("${");
                    while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                        out.push(d);
                        chars.next();
                    }
                    out.push('}');
                }
                Some('\\') => {
                    out.push('\\');
                    chars.next();
                }
                _ => out.push('\\'),
            }
        }

        Self::Template(out)
    }

    /// Wrap a closure.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Captures<'_>) -> String + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    /// Produce the replacement for a match.
    #[must_use]
    pub fn apply(&self, caps: &Captures<'_>) -> String {
        match self {
            Self::Template(template) => {
                let mut out = String::new();
                caps.expand(template, &mut out);
                out
            }
            Self::Function(f) => f(caps),
        }
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// A single alias rule: matcher plus substitution.
#[derive(Debug, Clone)]
pub struct AliasRule {
    pub pattern: Regex,
    pub substitution: Substitution,
}

impl AliasRule {
    /// Create a rule from a regular expression and a substitution.
    pub fn new(pattern: &str, substitution: Substitution) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| Error::InvalidAlias {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern,
            substitution,
        })
    }

    /// Regex rule with a `\N`/`$N` template.
    pub fn regex(pattern: &str, template: &str) -> Result<Self> {
        Self::new(pattern, Substitution::template(template))
    }

    /// Prefix rule: `key` matches `key` itself and anything under `key/`.
    ///
    /// The remainder after `key` is appended to `value`.
    pub fn prefix(key: &str, value: &str) -> Result<Self> {
        let value = value.to_string();
        Self::new(
            &format!("^{}(/.*|)$", regex_lite::escape(key)),
            Substitution::function(move |caps| {
                let rest = caps.get(1).map_or("", |m| m.as_str());
                format!("{value}{rest}")
            }),
        )
    }

    /// Build a rule from a settings entry. Keys starting with `^` are regexes.
    pub fn from_entry(key: &str, value: &str) -> Result<Self> {
        if key.starts_with('^') {
            Self::regex(key, value)
        } else {
            Self::prefix(key, value)
        }
    }

    /// Apply the rule to a specifier. `None` when the pattern does not match.
    #[must_use]
    pub fn apply(&self, spec: &str) -> Option<String> {
        let caps = self.pattern.captures(spec)?;
        Some(self.substitution.apply(&caps))
    }
}

/// Fully normalized options for one resolution call.
#[derive(Debug, Clone)]
pub struct ResolutionOptions {
    /// Base for relative alias targets.
    pub cwd: PathBuf,
    /// Extensions probed in order.
    pub extensions: Vec<String>,
    /// Extensions removed when the resolved file's extension differs from the specifier's.
    pub strip_extensions: Vec<String>,
    /// Absolute root directories, in search order.
    pub root: Vec<PathBuf>,
    /// Alias rules, in match order.
    pub alias: Vec<AliasRule>,
    /// Extensions treated as images.
    pub image_types: Vec<String>,
    /// Density suffixes, in search order.
    pub image_scale: Vec<String>,
    /// Execution mode.
    pub mode: Mode,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

impl ResolutionOptions {
    /// Options with defaults, no roots and no aliases.
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            extensions: owned(DEFAULT_EXTENSIONS),
            strip_extensions: owned(DEFAULT_EXTENSIONS),
            root: Vec::new(),
            alias: Vec::new(),
            image_types: owned(DEFAULT_IMAGE_TYPES),
            image_scale: owned(DEFAULT_IMAGE_SCALE),
            mode: Mode::default(),
        }
    }

    /// Normalize raw settings for a resolution from `current_file`.
    ///
    /// `current_file` and relative settings paths are taken from the process
    /// working directory. The mode is read from the environment.
    pub fn normalize(settings: &ResolverSettings, current_file: &Path) -> Result<Self> {
        let process_cwd = std::env::current_dir()?;
        let current_file = absolutize(&process_cwd, current_file);

        let cwd = match &settings.cwd {
            None => process_cwd.clone(),
            Some(CwdSetting::Directory(dir)) => absolutize(&process_cwd, dir),
            Some(CwdSetting::PackageJson) => current_file
                .parent()
                .and_then(nearest_package_dir)
                .unwrap_or_else(|| process_cwd.clone()),
        };

        let root = expand_roots(&settings.root, &cwd)?;

        let alias = settings
            .alias
            .iter()
            .map(|(key, value)| {
                let value = value.as_str().ok_or_else(|| {
                    Error::other(format!("alias `{key}` must map to a string"))
                })?;
                AliasRule::from_entry(key, value)
            })
            .collect::<Result<Vec<_>>>()?;

        let extensions = settings
            .extensions
            .clone()
            .unwrap_or_else(|| owned(DEFAULT_EXTENSIONS));
        let strip_extensions = settings
            .strip_extensions
            .clone()
            .unwrap_or_else(|| extensions.clone());

        Ok(Self {
            cwd,
            extensions,
            strip_extensions,
            root,
            alias,
            image_types: settings
                .image_types
                .clone()
                .unwrap_or_else(|| owned(DEFAULT_IMAGE_TYPES)),
            image_scale: settings
                .image_scale
                .clone()
                .unwrap_or_else(|| owned(DEFAULT_IMAGE_SCALE)),
            mode: Mode::from_env(),
        })
    }

    /// Append a root directory.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root.push(root.into());
        self
    }

    /// Append an alias rule.
    #[must_use]
    pub fn with_alias(mut self, rule: AliasRule) -> Self {
        self.alias.push(rule);
        self
    }

    /// Replace the probed extensions. Strip extensions follow.
    #[must_use]
    pub fn with_extensions<S: Into<String>>(
        mut self,
        extensions: impl IntoIterator<Item = S>,
    ) -> Self {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self.strip_extensions = self.extensions.clone();
        self
    }

    /// Replace the strip extensions.
    #[must_use]
    pub fn with_strip_extensions<S: Into<String>>(
        mut self,
        extensions: impl IntoIterator<Item = S>,
    ) -> Self {
        self.strip_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the image types.
    #[must_use]
    pub fn with_image_types<S: Into<String>>(mut self, types: impl IntoIterator<Item = S>) -> Self {
        self.image_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the image scale suffixes.
    #[must_use]
    pub fn with_image_scale<S: Into<String>>(mut self, scale: impl IntoIterator<Item = S>) -> Self {
        self.image_scale = scale.into_iter().map(Into::into).collect();
        self
    }

    /// Set the execution mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// Walk up from `start` to the first directory holding a `package.json`.
fn nearest_package_dir(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join("package.json").is_file() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

fn has_glob_magic(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Make roots absolute against `cwd`, expanding glob entries to directories.
fn expand_roots(roots: &[String], cwd: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::with_capacity(roots.len());

    for root in roots {
        if !has_glob_magic(root) {
            out.push(absolutize(cwd, Path::new(root)));
            continue;
        }

        let full_pattern = absolutize(cwd, Path::new(root));
        let pattern_str = full_pattern.to_string_lossy();
        let entries = glob::glob(&pattern_str).map_err(|source| Error::InvalidRootGlob {
            pattern: root.clone(),
            source,
        })?;
        out.extend(entries.flatten().filter(|p| p.is_dir()));
    }

    Ok(out)
}
