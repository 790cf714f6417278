//! PDF processing module.

mod columns;
mod extractor;

pub use columns::{ColumnSplitter, ColumnText, Glyph, PageColumns};
pub use extractor::{PdfContent, PdfExtractor};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract the left/right half text of every page, in page order.
    fn extract_columns(&self) -> Result<Vec<PageColumns>>;

    /// Extract the left/right half text of a specific page.
    fn extract_page_columns(&self, page: u32) -> Result<PageColumns> {
        self.extract_columns()?
            .into_iter()
            .find(|p| p.number == page)
            .ok_or(PdfError::InvalidPage(page))
    }

    /// Extract the text of the entire PDF: each page's left half, then its right half.
    fn extract_text(&self) -> Result<String> {
        Ok(document_text(&self.extract_columns()?))
    }
}

/// Concatenate page texts in page order.
pub fn document_text(pages: &[PageColumns]) -> String {
    pages.iter().map(PageColumns::text).collect()
}
