//! Discovery of Catapult log files under an HLS output directory

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::schema::{DesignLog, LOG_FILE_NAME};

/// Lazily walks a directory tree yielding every `catapult.log` it finds
///
/// Each log is attributed to the design named after its parent directory.
pub struct LogLocator {
    root: PathBuf,
    walker: Option<walkdir::IntoIter>,
}

impl LogLocator {
    /// Start a search below `root`
    ///
    /// A missing root is not an error: a warning is logged and the
    /// locator yields nothing.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();

        let walker = if root.exists() {
            Some(
                WalkDir::new(&root)
                    .min_depth(1)
                    .follow_links(false)
                    .sort_by_file_name()
                    .into_iter(),
            )
        } else {
            warn!("HLS directory '{}' does not exist", root.display());
            None
        };

        Self { root, walker }
    }
}

impl Iterator for LogLocator {
    type Item = DesignLog;

    fn next(&mut self) -> Option<DesignLog> {
        let walker = self.walker.as_mut()?;

        loop {
            let entry = match walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", self.root.display(), e);
                    continue;
                }
            };

            if entry.file_name() != LOG_FILE_NAME {
                continue;
            }

            // Symlinked logs count; symlinked directories are never entered
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                warn!("Skipping {}: not a regular file", entry.path().display());
                continue;
            }

            let path = entry.into_path();
            let design = design_name(&path);
            debug!("Found log for {}: {}", design, path.display());
            return Some(DesignLog { design, path });
        }
    }
}

/// Convenience wrapper collecting every log below `root`
pub fn find_catapult_logs(root: impl AsRef<Path>) -> Vec<DesignLog> {
    LogLocator::new(root).collect()
}

/// Name of the directory that holds a log file
fn design_name(log_path: &Path) -> String {
    log_path
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
