/// Track domain type
use crate::types::Artwork;
use serde::Serialize;
use std::fmt;

/// Catalog-local track identifier.
///
/// Ids form a dense 0-based sequence assigned in discovery order within
/// one catalog build. They are deterministic for an unchanged tree but
/// are not stable across builds of a changed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TrackId(u32);

impl TrackId {
    /// Create a track ID from its position in the catalog
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single indexed audio file.
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    /// Position of the track within its catalog build
    pub id: TrackId,

    /// Track title; falls back to the file name when untagged
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Path relative to the library root, always `/`-separated.
    /// Serialized as `file`; the retrieval key used by the transport.
    #[serde(rename = "file")]
    pub relative_path: String,

    /// Cover artwork, embedded or folder-level
    pub artwork: Option<Artwork>,
}
