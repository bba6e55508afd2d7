/// Raw audio retrieval API
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Body,
    extract::{Path as RoutePath, State},
    http::{header, HeaderMap, StatusCode},
    response::Response,
};
use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

/// GET /music/{*path}
///
/// Streams a file from the library root by its catalog retrieval key.
/// Paths that escape the root, do not exist, or are not regular files
/// are all the same plain 404; nothing about the filesystem leaks.
pub async fn serve_music(
    RoutePath(file): RoutePath<String>,
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response> {
    let file_path = resolve_under_root(&app_state.music_dir, &file)
        .ok_or_else(|| ServerError::NotFound("file not found".to_string()))?;

    let metadata = tokio::fs::metadata(&file_path).await?;
    let file_size = metadata.len();

    let mime_type = mime_guess::from_path(&file_path)
        .first_or_octet_stream()
        .to_string();

    // single-range requests let browsers seek
    if let Some(range) = headers.get(header::RANGE) {
        let range_str = range
            .to_str()
            .map_err(|_| ServerError::BadRequest("Invalid Range header".to_string()))?;

        if let Some((start, end)) = parse_range(range_str, file_size) {
            let mut file = File::open(&file_path).await?;
            file.seek(SeekFrom::Start(start)).await?;

            let content_length = end - start + 1;
            let reader = ReaderStream::new(file.take(content_length));

            let response = Response::builder()
                .status(StatusCode::PARTIAL_CONTENT)
                .header(header::CONTENT_TYPE, mime_type)
                .header(header::CONTENT_LENGTH, content_length)
                .header(
                    header::CONTENT_RANGE,
                    format!("bytes {}-{}/{}", start, end, file_size),
                )
                .header(header::ACCEPT_RANGES, "bytes")
                .body(Body::from_stream(reader))
                .map_err(|e| ServerError::Internal(format!("Failed to build response: {e}")))?;

            return Ok(response);
        }
    }

    // No range request - stream the entire file
    let file = File::open(&file_path).await?;
    let reader = ReaderStream::new(file);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type)
        .header(header::CONTENT_LENGTH, file_size)
        .header(header::ACCEPT_RANGES, "bytes")
        .body(Body::from_stream(reader))
        .map_err(|e| ServerError::Internal(format!("Failed to build response: {e}")))?;

    Ok(response)
}

/// Resolve a request path against the library root.
///
/// Canonicalizes both sides, so `..` segments and symlinks cannot
/// escape; anything not landing on a regular file under the root is
/// `None`.
fn resolve_under_root(root: &Path, relative: &str) -> Option<PathBuf> {
    let canonical_root = root.canonicalize().ok()?;
    let canonical = canonical_root.join(relative).canonicalize().ok()?;
    if !canonical.starts_with(&canonical_root) {
        return None;
    }
    canonical.is_file().then_some(canonical)
}

/// Parse an HTTP Range header
/// Format: "bytes=start-end"
fn parse_range(range: &str, file_size: u64) -> Option<(u64, u64)> {
    let range = range.strip_prefix("bytes=")?;

    if let Some((start_str, end_str)) = range.split_once('-') {
        let start: u64 = start_str.parse().ok()?;
        let end: u64 = if end_str.is_empty() {
            file_size.checked_sub(1)?
        } else {
            end_str.parse().ok()?
        };

        if start <= end && end < file_size {
            return Some((start, end));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("bytes=0-999", 10000), Some((0, 999)));
        assert_eq!(parse_range("bytes=1000-", 10000), Some((1000, 9999)));
        assert_eq!(parse_range("bytes=0-9999", 10000), Some((0, 9999)));
        assert_eq!(parse_range("bytes=10000-", 10000), None); // Out of bounds
        assert_eq!(parse_range("bytes=5-2", 10000), None);
        assert_eq!(parse_range("bytes=0-", 0), None); // Empty file
        assert_eq!(parse_range("invalid", 10000), None);
    }

    #[test]
    fn resolves_nested_files() {
        let root = tempfile::TempDir::new().unwrap();
        fs::create_dir(root.path().join("sub")).unwrap();
        fs::write(root.path().join("sub/a.mp3"), b"x").unwrap();

        let resolved = resolve_under_root(root.path(), "sub/a.mp3").unwrap();
        assert!(resolved.ends_with("sub/a.mp3"));
    }

    #[test]
    fn rejects_escaping_paths() {
        let parent = tempfile::TempDir::new().unwrap();
        let root = parent.path().join("root");
        fs::create_dir(&root).unwrap();
        fs::write(parent.path().join("secret.txt"), b"secret").unwrap();

        assert!(resolve_under_root(&root, "../secret.txt").is_none());
    }

    #[test]
    fn rejects_missing_files_and_directories() {
        let root = tempfile::TempDir::new().unwrap();
        fs::create_dir(root.path().join("sub")).unwrap();

        assert!(resolve_under_root(root.path(), "nope.mp3").is_none());
        assert!(resolve_under_root(root.path(), "sub").is_none());
    }
}
