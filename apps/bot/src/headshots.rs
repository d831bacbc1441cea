//! Headshot loader: pulls every file in a directory into memory at startup.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::headshot::Headshot;

/// The headshots collection, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct Headshots {
    by_name: BTreeMap<String, Headshot>,
}

impl Headshots {
    pub fn insert(&mut self, headshot: Headshot) {
        self.by_name.insert(headshot.file_name.clone(), headshot);
    }

    /// Exact file name wins; otherwise the file whose stem matches. When
    /// several stems match, the first file name in sort order is used.
    pub fn get(&self, key: &str) -> Option<&Headshot> {
        if let Some(headshot) = self.by_name.get(key) {
            return Some(headshot);
        }

        let mut matches = self.by_name.values().filter(|h| h.answers_to(key));
        let first = matches.next()?;
        let others: Vec<&str> = matches.map(|h| h.file_name.as_str()).collect();
        if !others.is_empty() {
            warn!(
                "Several headshots answer to '{key}': using {}, ignoring {}",
                first.file_name,
                others.join(", ")
            );
        }
        Some(first)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl FromIterator<Headshot> for Headshots {
    fn from_iter<I: IntoIterator<Item = Headshot>>(iter: I) -> Self {
        let mut headshots = Headshots::default();
        for headshot in iter {
            headshots.insert(headshot);
        }
        headshots
    }
}

/// Reads every non-directory entry of `dir` into memory.
///
/// Any unreadable directory or file aborts the whole load.
pub fn load_headshots(dir: &Path) -> Result<Headshots, AppError> {
    let read_dir_err = |source| AppError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut headshots = Headshots::default();

    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        // Symlinks are not followed here, only real subdirectories are skipped.
        if entry.file_type().map_err(read_dir_err)?.is_dir() {
            debug!("Skipping subdirectory {}", path.display());
            continue;
        }

        let content = fs::read(&path).map_err(|source| AppError::OpenFile {
            path: path.clone(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!("Loaded headshot {file_name} ({} bytes)", content.len());
        headshots.insert(Headshot::new(file_name, content));
    }

    info!("Loaded {} headshots from {}", headshots.len(), dir.display());
    Ok(headshots)
}
