/// Embedded-over-folder artwork composition
use crate::folder::FolderArtResolver;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tonearm_core::Artwork;

// Folder art is assumed JPEG whatever its actual content; kept for
// compatibility with the original indexer.
const FOLDER_ART_MIME: &str = "image/jpeg";

/// Produces the single artwork payload for a track, if any.
///
/// Embedded pictures (extracted from the tag container by the caller)
/// always take priority; folder art is the fallback. A missing or
/// unreadable source degrades to `None`, never to an error.
pub struct ArtworkResolver {
    folder_art: Arc<FolderArtResolver>,
}

impl ArtworkResolver {
    /// Create a resolver backed by the shared folder-art cache
    pub fn new(folder_art: Arc<FolderArtResolver>) -> Self {
        Self { folder_art }
    }

    /// Resolve artwork for the audio file at `path`.
    ///
    /// `embedded` is the picture pulled out of the file's own tags, when
    /// there is one. Otherwise the file's directory is searched through
    /// the folder-art cache and the winning image read from disk.
    pub fn resolve(&self, path: &Path, embedded: Option<Artwork>) -> Option<Artwork> {
        if let Some(artwork) = embedded {
            return Some(artwork);
        }

        let directory = path.parent()?;
        let art_path = self.folder_art.resolve(directory)?;
        match fs::read(&art_path) {
            Ok(data) => Some(Artwork::new(data, FOLDER_ART_MIME.to_string())),
            Err(e) => {
                // cached path can outlive the file it pointed at
                tracing::warn!(
                    path = %art_path.display(),
                    error = %e,
                    "failed to read folder art"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn resolver() -> ArtworkResolver {
        ArtworkResolver::new(Arc::new(FolderArtResolver::new()))
    }

    #[test]
    fn embedded_takes_priority_over_folder_art() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("folder.jpg"), b"folder bytes").unwrap();
        let embedded = Artwork::new(b"embedded bytes".to_vec(), "image/png".to_string());

        let resolved = resolver()
            .resolve(&dir.path().join("track.mp3"), Some(embedded.clone()))
            .unwrap();
        assert_eq!(resolved, embedded);
    }

    #[test]
    fn falls_back_to_folder_art() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cover.jpg"), b"cover bytes").unwrap();

        let resolved = resolver()
            .resolve(&dir.path().join("track.mp3"), None)
            .unwrap();
        assert_eq!(resolved.data, b"cover bytes");
        assert_eq!(resolved.mime_type, "image/jpeg");
    }

    #[test]
    fn folder_art_mime_ignores_file_content() {
        let dir = TempDir::new().unwrap();
        // PNG magic bytes inside a .jpg candidate still come back as JPEG
        fs::write(dir.path().join("folder.jpg"), b"\x89PNG\r\n\x1a\n").unwrap();

        let resolved = resolver()
            .resolve(&dir.path().join("track.mp3"), None)
            .unwrap();
        assert_eq!(resolved.mime_type, "image/jpeg");
    }

    #[test]
    fn none_when_no_source_exists() {
        let dir = TempDir::new().unwrap();
        assert!(resolver()
            .resolve(&dir.path().join("track.mp3"), None)
            .is_none());
    }

    #[test]
    fn vanished_folder_art_degrades_to_none() {
        let dir = TempDir::new().unwrap();
        let art = dir.path().join("folder.jpg");
        fs::write(&art, b"bytes").unwrap();

        let resolver = resolver();
        assert!(resolver.resolve(&dir.path().join("a.mp3"), None).is_some());

        // the cache still points at the deleted file
        fs::remove_file(&art).unwrap();
        assert!(resolver.resolve(&dir.path().join("b.mp3"), None).is_none());
    }
}
