use chrono::{DateTime, Local};
use serde::Serialize;

/// A validated search hit: the file existed when it was probed.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    /// Absolute path, the identity of the physical file.
    pub path: String,
    /// Final path component, the basis for series inference.
    pub name: String,
    /// Modification instant; the comparison key for "latest".
    pub modified: DateTime<Local>,
    /// Unix seconds of `modified`, the numeric display form.
    pub modified_epoch: i64,
}

impl FileRecord {
    pub fn new(path: String, name: String, modified: DateTime<Local>) -> Self {
        let modified_epoch = modified.timestamp();
        Self { path, name, modified, modified_epoch }
    }

    /// Modification time rendered for display.
    pub fn modified_display(&self) -> String {
        self.modified.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// One row of the final output, ready for rendering or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RankedResult {
    pub rank: usize,
    pub modified: String,
    pub series: String,
    pub name: String,
    pub path: String,
}

impl RankedResult {
    pub fn from_record(rank: usize, record: &FileRecord) -> Self {
        Self {
            rank,
            modified: record.modified_display(),
            series: super::normalize(&record.name),
            name: record.name.clone(),
            path: record.path.clone(),
        }
    }
}
