/// Metadata-specific errors
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `MetadataError`
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Metadata error types
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Scan root missing or not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Discovered file does not strip to a root-relative path
    #[error("file is outside the scanned root: {}", .0.display())]
    OutsideRoot(PathBuf),

    /// Lofty error
    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
}
