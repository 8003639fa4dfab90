use crate::discover::find_pdf_files;
use crate::pdf::PdfDocument;
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct PdfEntry {
    pub file_name: String,
    pub path: PathBuf,
    pub page_count: Option<u32>,
    pub error: Option<String>,
}

impl PdfEntry {
    pub fn describe(&self) -> String {
        match (self.page_count, &self.error) {
            (Some(pages), _) => format!("{} ({} pages)", self.file_name, pages),
            (None, Some(e)) => format!("{} (unreadable: {})", self.file_name, e),
            (None, None) => self.file_name.clone(),
        }
    }
}

/// Discover the PDFs in `dir` and read each one's page count.
///
/// A file that fails to open is still listed, with the error recorded.
pub fn list_pdfs<P: AsRef<Path>>(dir: P) -> Result<Vec<PdfEntry>> {
    let entries = find_pdf_files(dir)?
        .into_iter()
        .map(|path| {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            match PdfDocument::open(&path) {
                Ok(doc) => PdfEntry {
                    file_name,
                    page_count: Some(doc.page_count()),
                    error: None,
                    path,
                },
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "could not read PDF");
                    PdfEntry {
                        file_name,
                        page_count: None,
                        error: Some(format!("{:#}", e)),
                        path,
                    }
                }
            }
        })
        .collect();

    Ok(entries)
}

pub fn run<P: AsRef<Path>>(dir: P) -> Result<()> {
    let entries = list_pdfs(&dir)?;

    if entries.is_empty() {
        println!("No PDF files found in {}", dir.as_ref().display());
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        println!("{}. {}", i + 1, entry.describe());
    }

    Ok(())
}
