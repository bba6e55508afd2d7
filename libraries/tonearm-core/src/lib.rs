//! Tonearm Core
//!
//! Domain types shared across the Tonearm crates.
//!
//! The core crate defines the catalog data model: [`Track`], [`TrackId`]
//! and [`Artwork`], along with their wire representation. A catalog is an
//! ordered `Vec<Track>` produced by one build pass; tracks are immutable
//! once built and are discarded when the next build replaces them.
//!
//! # Example
//!
//! ```rust
//! use tonearm_core::{Artwork, Track, TrackId};
//!
//! let track = Track {
//!     id: TrackId::new(0),
//!     title: "Song".to_string(),
//!     artist: "Artist".to_string(),
//!     album: "Album".to_string(),
//!     relative_path: "albums/song.mp3".to_string(),
//!     artwork: Some(Artwork::new(vec![0xFF, 0xD8], "image/jpeg".to_string())),
//! };
//! assert_eq!(track.id.value(), 0);
//! ```

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::{Artwork, Track, TrackId};
