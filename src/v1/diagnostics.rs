use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::process_env;

pub const DEFAULT_ROOT: &str = "/opt";
pub const DEFAULT_MAX_DEPTH: usize = 4;
pub const LIBRARY_PATH: &str = "LD_LIBRARY_PATH";

/// Snapshot of the runtime the function is executing in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeEnvironment {
    pub path: String,
    pub search_paths: Vec<String>,
    pub directories: Vec<String>,
    pub event: Value,
}

/// Reports the environment, library search list and directory layout under
/// `root` (layers are mounted below `/opt` on Lambda).
#[derive(Debug, Clone)]
pub struct Diagnostics {
    root: PathBuf,
    max_depth: usize,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT, DEFAULT_MAX_DEPTH)
    }
}

impl Diagnostics {
    pub fn new<P: Into<PathBuf>>(root: P, max_depth: usize) -> Self {
        Self {
            root: root.into(),
            max_depth,
        }
    }

    pub fn runtime_environment(&self, event: &Value) -> RuntimeEnvironment {
        self.runtime_environment_from(event, process_env)
    }

    pub fn runtime_environment_from(
        &self,
        event: &Value,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> RuntimeEnvironment {
        RuntimeEnvironment {
            path: lookup("PATH").unwrap_or_default(),
            search_paths: search_paths(lookup(LIBRARY_PATH)),
            directories: self.directories(),
            event: event.clone(),
        }
    }

    /// Directories under the root, the root included, down to `max_depth`.
    /// Unreadable entries are skipped.
    pub fn directories(&self) -> Vec<String> {
        let mut found = vec![];
        if self.root.is_dir() {
            walk(&self.root, 0, self.max_depth, &mut found);
        }
        found.sort();
        found
    }
}

fn walk(dir: &Path, depth: usize, max_depth: usize, found: &mut Vec<String>) {
    found.push(dir.display().to_string());
    if depth >= max_depth {
        return;
    }
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        // symlinks are not followed
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            walk(&entry.path(), depth + 1, max_depth, found);
        }
    }
}

fn search_paths(paths: Option<String>) -> Vec<String> {
    paths
        .map(|paths| {
            env::split_paths(&paths)
                .map(|p| p.display().to_string())
                .filter(|p| !p.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
