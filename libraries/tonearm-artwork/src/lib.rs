//! Tonearm Artwork - cover art resolution
//!
//! Resolves the artwork for a track from two sources, in a fixed
//! priority order:
//!
//! 1. the embedded picture extracted from the file's tag container
//! 2. a conventionally-named image file in the track's directory
//!    (`folder.jpg`, `cover.jpg`, `albumart.jpg`, `front.jpg`)
//!
//! Folder lookups are memoized per directory for the process lifetime,
//! including negative results, so repeated catalog builds never re-probe
//! a directory. The cache stores only paths; image bytes are re-read per
//! build and owned by the track that carries them.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use tonearm_artwork::{ArtworkResolver, FolderArtResolver};
//!
//! let resolver = ArtworkResolver::new(Arc::new(FolderArtResolver::new()));
//! match resolver.resolve(Path::new("music/track.mp3"), None) {
//!     Some(artwork) => println!("{} bytes, {}", artwork.data.len(), artwork.mime_type),
//!     None => println!("no artwork"),
//! }
//! ```

mod folder;
mod resolver;

// Re-export public API
pub use folder::FolderArtResolver;
pub use resolver::ArtworkResolver;
