use crate::{
    blueprint,
    errors::{FileOperation, IoError},
    preview, scaffold,
};
use std::path::{Path, PathBuf};

/// Printed once every directory and file has been written.
pub const STATUS_LINES: [&str; 3] = [
    "プロジェクト構造が生成されました。",
    "Next.jsプロジェクトを作成するには、以下のコマンドを実行してください：",
    "npx create-next-app frontend",
];

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum StackgenError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

fn current_dir() -> Result<PathBuf, StackgenError> {
    let root = std::env::current_dir()
        .map_err(|error| IoError::new(FileOperation::ResolveRoot, PathBuf::from("."), error))?;

    Ok(root)
}

/// Scaffolds the Next.js + FastAPI layout under `root`, then prints the status lines.
///
/// Existing files at the target paths are overwritten.
///
/// # Errors
///
/// Returns a [`StackgenError`] if:
///
/// - A directory cannot be created, for example because a regular file is in its place.
/// - A file cannot be written.
///
/// The first failure stops the run and the status lines are not printed.
pub fn scaffold(root: &Path) -> Result<(), StackgenError> {
    let layout = blueprint::fullstack();

    log::debug!("Scaffolding project into: {}", root.display());

    scaffold::apply_layout(&layout, root)?;

    for line in STATUS_LINES {
        println!("{}", line);
    }

    Ok(())
}

/// Scaffolds into the process working directory, read once.
pub fn scaffold_current_dir() -> Result<(), StackgenError> {
    let root = current_dir()?;

    scaffold(&root)
}

/// Prints the tree that [`scaffold_current_dir`] would create without touching the disk.
pub fn preview_current_dir() -> Result<(), StackgenError> {
    let root = current_dir()?;

    preview::preview_as_tree(&blueprint::fullstack(), &root);

    Ok(())
}
