/// Folder-level artwork lookup with per-directory memoization
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Candidate file names, in priority order. `folder.jpg` wins over
/// `cover.jpg` when both exist. Matched literally, case-sensitive.
const CANDIDATE_FILENAMES: [&str; 4] = ["folder.jpg", "cover.jpg", "albumart.jpg", "front.jpg"];

/// Finds conventionally-named artwork files next to the audio files.
///
/// Results are cached per directory for the lifetime of the resolver,
/// negative outcomes included. Construct one at startup and share it
/// across catalog builds; directory contents are assumed static while
/// the process runs, so entries are never invalidated.
pub struct FolderArtResolver {
    cache: Mutex<HashMap<PathBuf, Option<PathBuf>>>,
    // Disk probes performed so far; lets tests assert cache hits skip the disk.
    probes: AtomicUsize,
}

impl FolderArtResolver {
    /// Create a resolver with an empty cache
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            probes: AtomicUsize::new(0),
        }
    }

    /// Find artwork in `directory`.
    ///
    /// Returns the path of the first candidate that exists as a regular
    /// file, or `None`. A cached outcome (hit or absence) is returned
    /// without touching the disk. Only the given directory is checked,
    /// never its subdirectories.
    pub fn resolve(&self, directory: &Path) -> Option<PathBuf> {
        if let Some(cached) = self.cache.lock().unwrap().get(directory) {
            tracing::debug!(directory = %directory.display(), "folder art cache hit");
            return cached.clone();
        }

        let found = CANDIDATE_FILENAMES
            .iter()
            .map(|name| directory.join(name))
            .find(|candidate| {
                self.probes.fetch_add(1, Ordering::Relaxed);
                candidate.is_file()
            });

        self.cache
            .lock()
            .unwrap()
            .insert(directory.to_path_buf(), found.clone());
        found
    }

    #[cfg(test)]
    fn disk_probes(&self) -> usize {
        self.probes.load(Ordering::Relaxed)
    }
}

impl Default for FolderArtResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"jpeg bytes").unwrap();
    }

    #[test]
    fn returns_none_for_empty_directory() {
        let dir = TempDir::new().unwrap();
        let resolver = FolderArtResolver::new();
        assert_eq!(resolver.resolve(dir.path()), None);
    }

    #[test]
    fn finds_single_candidate() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "albumart.jpg");
        let resolver = FolderArtResolver::new();
        assert_eq!(
            resolver.resolve(dir.path()),
            Some(dir.path().join("albumart.jpg"))
        );
    }

    #[test]
    fn folder_jpg_wins_over_cover_jpg() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "cover.jpg");
        touch(dir.path(), "folder.jpg");
        let resolver = FolderArtResolver::new();
        assert_eq!(
            resolver.resolve(dir.path()),
            Some(dir.path().join("folder.jpg"))
        );
    }

    // case-sensitivity only holds on case-sensitive filesystems
    #[test]
    #[cfg(target_os = "linux")]
    fn candidate_names_are_case_sensitive() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Folder.jpg");
        let resolver = FolderArtResolver::new();
        assert_eq!(resolver.resolve(dir.path()), None);
    }

    #[test]
    fn directories_are_not_candidates() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("folder.jpg")).unwrap();
        touch(dir.path(), "front.jpg");
        let resolver = FolderArtResolver::new();
        assert_eq!(
            resolver.resolve(dir.path()),
            Some(dir.path().join("front.jpg"))
        );
    }

    #[test]
    fn hit_is_cached_without_reprobing() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "cover.jpg");
        let resolver = FolderArtResolver::new();

        let first = resolver.resolve(dir.path());
        // folder.jpg missed, cover.jpg hit
        assert_eq!(resolver.disk_probes(), 2);

        let second = resolver.resolve(dir.path());
        assert_eq!(first, second);
        assert_eq!(resolver.disk_probes(), 2);
    }

    #[test]
    fn absence_is_cached_without_reprobing() {
        let dir = TempDir::new().unwrap();
        let resolver = FolderArtResolver::new();

        assert_eq!(resolver.resolve(dir.path()), None);
        assert_eq!(resolver.disk_probes(), CANDIDATE_FILENAMES.len());

        // even a file added later is not seen; the cache never invalidates
        touch(dir.path(), "folder.jpg");
        assert_eq!(resolver.resolve(dir.path()), None);
        assert_eq!(resolver.disk_probes(), CANDIDATE_FILENAMES.len());
    }

    #[test]
    fn directories_are_cached_independently() {
        let art_dir = TempDir::new().unwrap();
        let bare_dir = TempDir::new().unwrap();
        touch(art_dir.path(), "front.jpg");

        let resolver = FolderArtResolver::new();
        assert!(resolver.resolve(art_dir.path()).is_some());
        assert!(resolver.resolve(bare_dir.path()).is_none());
        assert!(resolver.resolve(art_dir.path()).is_some());
    }
}
