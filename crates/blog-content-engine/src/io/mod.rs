use crate::models::{ContentBlock, Post};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content payload in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read an editor source file (HTML or Markdown) and return its content
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read a block list in the blog API wire shape
///
/// Accepts either a bare JSON array of blocks or a post object with a
/// `contents` array.
pub fn read_blocks(path: &Path) -> Result<Vec<ContentBlock>, IoError> {
    let raw = read_source(path)?;
    let json_error = |source: serde_json::Error| IoError::Json {
        path: path.to_path_buf(),
        source,
    };

    if raw.trim_start().starts_with('[') {
        serde_json::from_str(&raw).map_err(json_error)
    } else {
        let post: Post = serde_json::from_str(&raw).map_err(json_error)?;
        Ok(post.contents)
    }
}

/// Write a post as pretty-printed JSON
pub fn write_post(path: &Path, post: &Post) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    let json = serde_json::to_string_pretty(post).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(IoError::Io)
}
