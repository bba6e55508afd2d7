/// Catalog builder implementation
use crate::error::{MetadataError, Result};
use crate::reader::{TagRead, TagReader, TagSummary};
use std::path::Path;
use tonearm_artwork::ArtworkResolver;
use tonearm_core::{Track, TrackId};
use walkdir::WalkDir;

/// File extension accepted by the walk, matched case-insensitively
const AUDIO_EXTENSION: &str = "mp3";

const UNKNOWN_ARTIST: &str = "Unknown Artist";
const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Builds the full ordered catalog for a library root.
///
/// Holds the tag reader and the injected artwork resolver (and through
/// it the process-lifetime folder-art cache). The catalog itself is
/// never cached: every call to [`build`](Self::build) walks the tree
/// again and assigns a fresh dense id sequence.
pub struct CatalogBuilder {
    reader: TagReader,
    artwork: ArtworkResolver,
}

impl CatalogBuilder {
    /// Create a catalog builder around a shared artwork resolver
    pub fn new(artwork: ArtworkResolver) -> Self {
        Self {
            reader: TagReader::new(),
            artwork,
        }
    }

    /// Walk `root` recursively and produce the ordered catalog.
    ///
    /// Entries are visited sorted by file name, so an unchanged tree
    /// yields the same id-to-path mapping on every build. Ids form a
    /// dense 0-based sequence over the emitted tracks; a file that fails
    /// to index is logged, skipped, and leaves no gap.
    pub fn build(&self, root: &Path) -> Result<Vec<Track>> {
        if !root.is_dir() {
            return Err(MetadataError::NotADirectory(root.to_path_buf()));
        }

        let mut tracks = Vec::new();
        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !is_audio_file(entry.path()) {
                continue;
            }

            let id = TrackId::new(tracks.len() as u32);
            match self.index_file(root, entry.path(), id) {
                Ok(track) => tracks.push(track),
                Err(e) => {
                    tracing::warn!(
                        path = %entry.path().display(),
                        error = %e,
                        "skipping file"
                    );
                }
            }
        }

        tracing::debug!(root = %root.display(), tracks = tracks.len(), "catalog built");
        Ok(tracks)
    }

    /// Index a single discovered file into a track
    fn index_file(&self, root: &Path, path: &Path, id: TrackId) -> Result<Track> {
        let relative_path = relative_key(root, path)?;

        let summary = match self.reader.read(path) {
            TagRead::Parsed(summary) => summary,
            TagRead::Degraded(reason) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %reason,
                    "unreadable tags, applying defaults"
                );
                TagSummary::default()
            }
        };

        let TagSummary {
            title,
            artist,
            album,
            embedded_artwork,
        } = summary;
        let artwork = self.artwork.resolve(path, embedded_artwork);

        Ok(Track {
            id,
            title: title.unwrap_or_else(|| file_name(path)),
            artist: artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            album: album.unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
            relative_path,
            artwork,
        })
    }
}

/// Check whether a path carries the audio extension
fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(AUDIO_EXTENSION))
        .unwrap_or(false)
}

/// Retrieval key for a discovered file: root-relative and `/`-separated
/// on every platform, never containing the root's own segment
fn relative_key(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| MetadataError::OutsideRoot(path.to_path_buf()))?;
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(segments.join("/"))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(is_audio_file(Path::new("a.mp3")));
        assert!(is_audio_file(Path::new("a.MP3")));
        assert!(is_audio_file(Path::new("a.Mp3")));
        assert!(!is_audio_file(Path::new("a.flac")));
        assert!(!is_audio_file(Path::new("a.mp3.bak")));
        assert!(!is_audio_file(Path::new("mp3")));
    }

    #[test]
    fn relative_key_is_forward_slashed() {
        let key = relative_key(Path::new("/music"), Path::new("/music/albums/one/a.mp3")).unwrap();
        assert_eq!(key, "albums/one/a.mp3");
    }

    #[test]
    fn relative_key_rejects_foreign_paths() {
        let result = relative_key(Path::new("/music"), Path::new("/elsewhere/a.mp3"));
        assert!(matches!(result, Err(MetadataError::OutsideRoot(_))));
    }
}
