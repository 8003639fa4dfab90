use crate::partition::{pages_per_piece, partition};
use anyhow::Result;

pub fn run(total_pages: u32, num_pieces: u32) -> Result<()> {
    let pieces = partition(total_pages, num_pieces)?;

    println!(
        "{} pages into {} pieces ({} pages per piece)",
        total_pages,
        num_pieces,
        pages_per_piece(total_pages, num_pieces)
    );

    for (i, piece) in pieces.iter().enumerate() {
        if piece.is_empty() {
            println!("{}: (empty)", i + 1);
        } else {
            println!("{}: pages {}-{}", i + 1, piece.first_page(), piece.last_page());
        }
    }

    Ok(())
}
