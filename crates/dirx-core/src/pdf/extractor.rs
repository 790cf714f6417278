//! PDF loading with lopdf and column-split text extraction with pdf-extract.

use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;
use tracing::{debug, warn};

use super::columns::{ColumnSplitter, PageColumns};
use super::{document_text, PdfProcessor, Result};
use crate::error::PdfError;

/// PDF text extractor that reads each page as two half-width columns.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    split_columns: bool,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Full document text, pages in order.
    pub text: String,
    /// Per-page column text.
    pub pages: Vec<PageColumns>,
}

impl PdfContent {
    /// Whether any page produced non-whitespace text.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            split_columns: true,
        }
    }

    /// Set whether pages are split into left and right halves.
    pub fn with_column_split(mut self, split: bool) -> Self {
        self.split_columns = split;
        self
    }

    /// Extract all pages and the assembled document text.
    pub fn extract_all(&self) -> Result<PdfContent> {
        let pages = self.extract_columns()?;
        let text = document_text(&pages);

        debug!(
            "PDF extraction: {} pages, {} chars text",
            pages.len(),
            text.len()
        );

        Ok(PdfContent { text, pages })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract re-parses the bytes, so keep the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_columns(&self) -> Result<Vec<PageColumns>> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        let doc = pdf_extract::Document::load_mem(&self.raw_data)
            .map_err(|e| PdfError::Parse(e.to_string()))?;

        let mut splitter = ColumnSplitter::new(self.split_columns);

        // pdf-extract panics on some malformed content streams
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::output_doc(&doc, &mut splitter)
        }));

        match outcome {
            Ok(Ok(())) => Ok(splitter.into_pages()),
            Ok(Err(e)) => Err(PdfError::TextExtraction(e.to_string())),
            Err(_) => {
                warn!("pdf-extract panicked while reading content streams");
                Err(PdfError::TextExtraction(
                    "text extractor aborted on malformed content".to_string(),
                ))
            }
        }
    }
}
