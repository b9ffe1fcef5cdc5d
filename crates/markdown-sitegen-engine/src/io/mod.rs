use crate::models::SourceFile;
use relative_path::{PathExt, RelativePath};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a file under `root` and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file under `root`
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Copy a file from one root to another, keeping its relative path
pub fn copy_file(relative_path: &RelativePath, from: &Path, to: &Path) -> Result<(), IoError> {
    let source = relative_path.to_path(from);
    if !source.exists() {
        return Err(IoError::NotFound(source));
    }
    let dest = relative_path.to_path(to);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::copy(&source, &dest).map_err(IoError::Io)?;
    Ok(())
}

/// Remove a directory and everything in it, then recreate it empty
pub fn reset_dir(path: &Path) -> Result<(), IoError> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(IoError::Io)?;
    }
    fs::create_dir_all(path).map_err(IoError::Io)
}

/// Scan every file under the content directory, sorted by relative path
pub fn scan_content_files(content_root: &Path) -> Result<Vec<SourceFile>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<SourceFile>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(root, &path, files)?;
        } else {
            let relative = path.relative_to(root).map_err(|e| {
                IoError::InvalidContentDir(format!("{}: {e}", path.display()))
            })?;
            files.push(SourceFile::new(relative));
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}
