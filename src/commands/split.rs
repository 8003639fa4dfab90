use crate::partition::{partition, Piece};
use crate::pdf::PdfDocument;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Default, Clone)]
pub struct SplitOptions {
    /// Don't write files for pieces that have no pages
    pub skip_empty: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub source: String,
    pub total_pages: u32,
    pub pieces: u32,
    pub parts: Vec<PartReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartReport {
    /// 1-based piece number
    pub index: u32,
    pub file_name: String,
    pub path: String,
    /// 1-based page span, absent when the part has no pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_page: Option<u32>,
    pub page_count: u32,
}

impl PartReport {
    /// Human readable page span, e.g. "Pages 5-8"
    pub fn describe_pages(&self) -> String {
        match (self.first_page, self.last_page) {
            (Some(first), Some(last)) => format!("Pages {}-{}", first, last),
            _ => "no pages".to_string(),
        }
    }
}

pub fn output_file_name(stem: &str, index: u32) -> String {
    format!("{}_part_{}.pdf", stem, index)
}

/// Base name the parts of `path` are named after
pub fn source_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

/// Split `input` into `num_pieces` files of consecutive pages inside `output_dir`.
pub fn split_pdf<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    num_pieces: u32,
    output_dir: Q,
    options: &SplitOptions,
) -> Result<SplitReport> {
    let input = input.as_ref();
    let output_dir = output_dir.as_ref();

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let doc = PdfDocument::open(input)?;
    let total_pages = doc.page_count();
    let pieces = partition(total_pages, num_pieces)?;

    let stem = source_stem(input);

    tracing::info!(
        source = %input.display(),
        total_pages,
        num_pieces,
        "splitting PDF"
    );

    let mut parts = Vec::with_capacity(pieces.len());

    for (i, piece) in pieces.iter().enumerate() {
        if piece.is_empty() && options.skip_empty {
            tracing::debug!(piece = i + 1, "skipping empty piece");
            continue;
        }

        let index = i as u32 + 1;
        let file_name = output_file_name(&stem, index);
        let output_path = output_dir.join(&file_name);

        let mut new_doc = doc.extract_piece(piece)?;
        PdfDocument::save(&mut new_doc, &output_path)?;

        tracing::debug!(
            path = %output_path.display(),
            start = piece.start,
            end = piece.end,
            "wrote part"
        );

        parts.push(part_report(index, file_name, &output_path, piece));
    }

    Ok(SplitReport {
        source: input.display().to_string(),
        total_pages,
        pieces: num_pieces,
        parts,
    })
}

fn part_report(index: u32, file_name: String, path: &Path, piece: &Piece) -> PartReport {
    let (first_page, last_page) = if piece.is_empty() {
        (None, None)
    } else {
        (Some(piece.first_page()), Some(piece.last_page()))
    };

    PartReport {
        index,
        file_name,
        path: path.display().to_string(),
        first_page,
        last_page,
        page_count: piece.len(),
    }
}

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    num_pieces: u32,
    output_dir: Q,
    options: &SplitOptions,
    json: bool,
) -> Result<()> {
    let report = split_pdf(&input, num_pieces, &output_dir, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for part in &report.parts {
        println!("Created: {} ({})", part.file_name, part.describe_pages());
    }

    println!(
        "Split {} pages into {} part(s) in {}",
        report.total_pages,
        report.parts.len(),
        output_dir.as_ref().display()
    );

    Ok(())
}
