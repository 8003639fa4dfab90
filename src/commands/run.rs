use crate::commands::list::{list_pdfs, PdfEntry};
use crate::commands::split::{source_stem, split_pdf, SplitOptions};
use crate::config::SplitConfig;
use crate::prompt::prompt_piece_count;
use anyhow::Result;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Split every PDF in the configured source directory.
///
/// The piece count comes from `pieces` if set, otherwise it is asked for on
/// `input`. A source that fails to split is reported and skipped.
pub fn run<R: BufRead, W: Write>(
    config: &SplitConfig,
    pieces: Option<u32>,
    input: &mut R,
    output: &mut W,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    let entries = list_pdfs(&config.source_dir)?;
    if entries.is_empty() {
        writeln!(
            output,
            "No PDF files found in {}!",
            config.source_dir.display()
        )?;
        return Ok(summary);
    }

    writeln!(output, "\nAvailable PDF files:")?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, entry.describe())?;
    }

    let num_pieces = match pieces {
        Some(n) if n > 0 => n,
        _ => prompt_piece_count(input, output)?,
    };

    for stem in colliding_stems(&entries) {
        tracing::warn!(
            stem = %stem,
            "several sources share this name, their parts overwrite each other"
        );
    }

    let options = SplitOptions {
        skip_empty: config.skip_empty,
    };

    for entry in &entries {
        match entry.page_count {
            Some(pages) => writeln!(
                output,
                "\nSplitting {} ({} pages) into {} parts...",
                entry.file_name, pages, num_pieces
            )?,
            None => writeln!(
                output,
                "\nSplitting {} into {} parts...",
                entry.file_name, num_pieces
            )?,
        }

        match split_pdf(&entry.path, num_pieces, &config.output_dir, &options) {
            Ok(report) => {
                for part in &report.parts {
                    writeln!(output, "Created: {} ({})", part.file_name, part.describe_pages())?;
                }
                summary.succeeded += 1;
            }
            Err(e) => {
                tracing::warn!(path = %entry.path.display(), error = %e, "failed to split PDF");
                writeln!(
                    output,
                    "An error occurred processing {}: {:#}",
                    entry.file_name, e
                )?;
                summary.failed += 1;
            }
        }
    }

    writeln!(output, "\nPDF splitting completed successfully!")?;
    writeln!(
        output,
        "Split files can be found in the '{}' directory",
        config.output_dir.display()
    )?;

    Ok(summary)
}

/// Stems shared by more than one source, e.g. `a.pdf` and `a.PDF`
fn colliding_stems(entries: &[PdfEntry]) -> Vec<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for entry in entries {
        *counts.entry(source_stem(&entry.path)).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(stem, _)| stem)
        .collect()
}
