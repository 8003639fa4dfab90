use anyhow::{anyhow, Result};
use serde::Serialize;

/// A half-open, 0-based page range `[start, end)` of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub start: u32,
    pub end: u32,
}

impl Piece {
    pub fn new(start: u32, end: u32) -> Self {
        Piece { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First page of the piece, 1-based
    pub fn first_page(&self) -> u32 {
        self.start + 1
    }

    /// Last page of the piece, 1-based and inclusive
    pub fn last_page(&self) -> u32 {
        self.end
    }

    /// Whether the 0-based page index falls inside this piece
    pub fn contains(&self, index: u32) -> bool {
        self.start <= index && index < self.end
    }
}

/// Number of pages in every non-terminal piece (rounded up)
pub fn pages_per_piece(total_pages: u32, num_pieces: u32) -> u32 {
    total_pages.div_ceil(num_pieces)
}

/// Split `total_pages` into `num_pieces` contiguous ranges.
///
/// Earlier pieces are filled to `pages_per_piece` first, so the last non-empty
/// piece may be shorter. When there are fewer pages than pieces the trailing
/// pieces are empty and sit at `(total_pages, total_pages)`.
pub fn partition(total_pages: u32, num_pieces: u32) -> Result<Vec<Piece>> {
    if num_pieces == 0 {
        return Err(anyhow!("Number of pieces must be at least 1"));
    }

    let per_piece = pages_per_piece(total_pages, num_pieces);

    let pieces = (0..num_pieces)
        .map(|i| {
            let start = i.saturating_mul(per_piece).min(total_pages);
            let end = (i + 1).saturating_mul(per_piece).min(total_pages);
            Piece::new(start, end)
        })
        .collect();

    Ok(pieces)
}
