use crate::series::FileRecord;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stat candidate paths and keep the ones that still exist.
///
/// The index can lag the filesystem; entries that vanished between indexing
/// and now are dropped without comment. Order of survivors follows the
/// candidate order.
pub fn probe_candidates(paths: &[PathBuf]) -> Vec<FileRecord> {
    paths.iter().filter_map(|path| probe(path)).collect()
}

fn probe(path: &Path) -> Option<FileRecord> {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(err) => {
            debug!(path = %path.display(), %err, "skipping stale candidate");
            return None;
        }
    };
    let modified: DateTime<Local> = match metadata.modified() {
        Ok(mtime) => mtime.into(),
        Err(err) => {
            debug!(path = %path.display(), %err, "skipping candidate without readable mtime");
            return None;
        }
    };
    let name = path.file_name()?.to_string_lossy().into_owned();
    Some(FileRecord::new(path.display().to_string(), name, modified))
}
