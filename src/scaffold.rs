use crate::{
    errors::{FileOperation, IoError},
    layout::Layout,
};
use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("I/O error within scaffold domain")]
    #[diagnostic(code(stackgen::scaffold::io))]
    Io(#[from] IoError),
}

/// Applies directory and file creation operations from a [`Layout`].
///
/// Stops at the first failure; nothing already written is undone.
pub fn apply_layout(layout: &Layout, root: &Path) -> Result<(), ScaffoldError> {
    // First create all directories
    for directory in &layout.directories {
        create_directory(&root.join(&directory.path))?;
    }

    // Then write all files
    for file in &layout.files {
        write_file(&root.join(&file.path), file.content)?;
    }

    Ok(())
}
/// Creates all directories in the specified path if they do not exist.
///
/// This function uses [`std::fs::create_dir_all`], so an existing directory is
/// not an error while an existing non-directory at any component is.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if any directory creation fails due to I/O issues.
pub fn create_directory(path: &Path) -> Result<(), ScaffoldError> {
    log::debug!("...creating dir: {}", path.display());

    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    Ok(())
}
/// Writes a file with the provided contents to the specified path.
///
/// The file is created or truncated. The handle is closed before returning,
/// whether or not the write succeeded.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if writing to the file fails due to I/O issues.
pub fn write_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    log::debug!("...writing file: {} ({} bytes)", path.display(), contents.len());

    std::fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    log::info!("create {}", path.display());

    Ok(())
}
