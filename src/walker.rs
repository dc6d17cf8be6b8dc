use std::{
    io,
    path::{Path, PathBuf},
};

use crate::error::Result;

/// A text file found directly inside the corpus directory.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// File name, used as the document ID.
    pub name: String,
    /// Path to read the file from.
    pub path: PathBuf,
}

const TEXT_EXTENSION: &str = "txt";

/// List the `.txt` files directly inside `root`, sorted by name.
///
/// Subdirectories are not descended into. Hidden entries (names starting
/// with `.`) and broken symlinks are skipped. A missing root or one that is
/// not a directory is an I/O error.
pub fn discover_files(root: &Path) -> Result<Vec<DiscoveredFile>> {
    if !std::fs::metadata(root)?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("corpus path is not a directory: {}", root.display()),
        )
        .into());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        // Follows symlinks.
        let Ok(metadata) = std::fs::metadata(&path) else {
            continue;
        };
        if metadata.is_file() && has_text_extension(&path) {
            files.push(DiscoveredFile { name, path });
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

fn has_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == TEXT_EXTENSION)
}
