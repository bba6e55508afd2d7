/// Shared application state
use std::path::PathBuf;
use std::sync::Arc;
use tonearm_metadata::CatalogBuilder;

/// Application state shared across all handlers.
///
/// The catalog builder (and through it the folder-art cache) lives for
/// the whole process; the catalog itself is rebuilt per request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogBuilder>,
    pub music_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogBuilder>, music_dir: PathBuf) -> Self {
        Self {
            catalog,
            music_dir: Arc::new(music_dir),
        }
    }
}
