//! Tonearm Metadata
//!
//! Tag extraction and catalog building for Tonearm.
//!
//! This crate provides:
//! - Tag reading from MP3 files (ID3 text frames and attached pictures)
//! - Recursive library indexing with stable per-build track ids
//!
//! A catalog build is synchronous and sequential: one file is opened,
//! parsed, and closed before the next. Per-file failures degrade or skip
//! that file; they never abort the build.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use tonearm_artwork::{ArtworkResolver, FolderArtResolver};
//! use tonearm_metadata::CatalogBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let folder_art = Arc::new(FolderArtResolver::new());
//! let builder = CatalogBuilder::new(ArtworkResolver::new(folder_art));
//! let catalog = builder.build(Path::new("/music"))?;
//! println!("{} tracks", catalog.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod reader;
mod scanner;

pub use error::{MetadataError, Result};
pub use reader::{TagRead, TagReader, TagSummary};
pub use scanner::CatalogBuilder;
