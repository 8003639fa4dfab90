pub mod document;

#[cfg(test)]
pub mod testing;

pub use document::PdfDocument;
