use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find the PDF files directly inside `dir`, sorted by file name.
///
/// Only regular files with a `.pdf` extension (any case) are returned;
/// subdirectories are not searched.
pub fn find_pdf_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        if has_pdf_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
