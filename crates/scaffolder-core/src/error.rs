//! Errors that stop a scaffold run before or instead of copying

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal scaffold errors.
///
/// Failures of individual copies are not represented here: they are counted
/// in the run's `ScaffoldResult` and the run carries on.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Source directory does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Required item '{item}' not found in source directory (expected path: {})", .expected.display())]
    MissingSourceItem { item: String, expected: PathBuf },

    #[error("Target {} overlaps the template source {}", .target.display(), .source_dir.display())]
    TargetOverlapsSource {
        source_dir: PathBuf,
        target: PathBuf,
    },

    #[error("Failed to prepare target directory {}: {source}", .path.display())]
    TargetCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Setup cancelled by user")]
    Cancelled,
}

impl ScaffoldError {
    /// Whether the run stopped because the user asked it to
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScaffoldError::Cancelled)
    }
}
