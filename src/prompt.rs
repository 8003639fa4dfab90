use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use thiserror::Error;

pub const PIECE_COUNT_PROMPT: &str = "Enter the number of pieces to split the PDF into: ";

/// Why a piece count entered by the user was rejected.
///
/// The `Display` text is what the user sees before being asked again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PieceCountError {
    #[error("Please enter a valid number.")]
    Invalid,

    #[error("Please enter a positive number.")]
    NotPositive,

    #[error("Please enter a number no larger than {}.", u32::MAX)]
    TooLarge,
}

pub fn parse_piece_count(input: &str) -> Result<u32, PieceCountError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| PieceCountError::Invalid)?;

    if value <= 0 {
        return Err(PieceCountError::NotPositive);
    }

    u32::try_from(value).map_err(|_| PieceCountError::TooLarge)
}

/// Ask for a piece count until a valid one is entered.
///
/// Running out of input before a valid answer is an error.
pub fn prompt_piece_count<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u32> {
    let mut line = String::new();

    loop {
        write!(output, "\n{}", PIECE_COUNT_PROMPT)?;
        output.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read piece count")?;
        if read == 0 {
            bail!("Input ended before a piece count was entered");
        }

        match parse_piece_count(&line) {
            Ok(count) => return Ok(count),
            Err(e) => {
                tracing::debug!(input = line.trim(), "rejected piece count");
                writeln!(output, "{}", e)?;
            }
        }
    }
}
