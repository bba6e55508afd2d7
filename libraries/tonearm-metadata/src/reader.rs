/// Tag container reading using lofty
use crate::error::MetadataError;
use lofty::file::TaggedFileExt;
use lofty::tag::{Accessor, Tag};
use std::path::Path;
use tonearm_core::Artwork;

/// Text frames and embedded picture pulled from one file's tag container
#[derive(Debug, Clone, Default)]
pub struct TagSummary {
    /// Title frame, first value
    pub title: Option<String>,

    /// Artist frame, first value
    pub artist: Option<String>,

    /// Album frame, first value
    pub album: Option<String>,

    /// First attached-picture frame, with its declared MIME type
    pub embedded_artwork: Option<Artwork>,
}

/// Outcome of reading a file's tag container.
///
/// Reading never fails outright: a file the parser rejects comes back as
/// [`TagRead::Degraded`] with the diagnostic, and the caller applies the
/// documented defaults (file name for the title, "Unknown Artist",
/// "Unknown Album", no embedded artwork).
#[derive(Debug)]
pub enum TagRead {
    /// Container parsed; any subset of the frames may be present
    Parsed(TagSummary),

    /// File could not be parsed as tagged audio at all
    Degraded(MetadataError),
}

/// Tag reader for the ID3 container embedded in MP3 files
pub struct TagReader;

impl TagReader {
    /// Create a new tag reader
    pub fn new() -> Self {
        Self
    }

    /// Read the tag container of the file at `path`.
    ///
    /// A file with no container at all still parses, to an empty
    /// summary; only files lofty cannot read as audio degrade.
    pub fn read(&self, path: &Path) -> TagRead {
        let tagged_file = match lofty::read_from_path(path) {
            Ok(file) => file,
            Err(e) => return TagRead::Degraded(e.into()),
        };

        match tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
        {
            Some(tag) => TagRead::Parsed(Self::extract_from_tag(tag)),
            None => TagRead::Parsed(TagSummary::default()),
        }
    }

    /// Extract the recognized frames from a lofty tag
    fn extract_from_tag(tag: &Tag) -> TagSummary {
        // accessor reads return the first value of a repeated frame
        let mut summary = TagSummary {
            title: tag.title().map(|value| value.to_string()),
            artist: tag.artist().map(|value| value.to_string()),
            album: tag.album().map(|value| value.to_string()),
            embedded_artwork: None,
        };

        // the picture list holds the tag's attached-picture frames; the
        // first one becomes the embedded artwork, whatever its picture type
        summary.embedded_artwork = tag.pictures().first().map(|picture| {
            let mime_type = picture
                .mime_type()
                .map(|m| m.as_str())
                .unwrap_or("image/jpeg");
            Artwork::new(picture.data().to_vec(), mime_type.to_string())
        });

        summary
    }
}

impl Default for TagReader {
    fn default() -> Self {
        Self::new()
    }
}
