//! In-memory probe for resolver unit tests.

use super::classify::{classify, SpecifierKind};
use super::probe::ModuleProbe;
use modpath_util::path::absolutize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Probe over a fixed set of absolute file paths that records every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingProbe {
    files: Vec<PathBuf>,
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl RecordingProbe {
    pub(crate) fn with_files(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(PathBuf::from).collect(),
            calls: Mutex::default(),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f == path)
    }

    fn find(&self, base: &Path, extensions: &[String]) -> Option<PathBuf> {
        if self.exists(base) {
            return Some(base.to_path_buf());
        }
        extensions
            .iter()
            .map(|ext| PathBuf::from(format!("{}{ext}", base.display())))
            .find(|candidate| self.exists(candidate))
    }
}

impl ModuleProbe for RecordingProbe {
    fn resolve(&self, specifier: &str, basedir: &Path, extensions: &[String]) -> Option<PathBuf> {
        self.calls
            .lock()
            .unwrap()
            .push((specifier.to_string(), basedir.to_path_buf()));

        match classify(specifier) {
            SpecifierKind::Bare => basedir
                .ancestors()
                .find_map(|dir| self.find(&dir.join("node_modules").join(specifier), extensions)),
            _ => self.find(&absolutize(basedir, Path::new(specifier)), extensions),
        }
    }
}
