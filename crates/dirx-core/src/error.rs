//! Error types for the dirx-core library.

use thiserror::Error;

/// Main error type for the dirx library.
#[derive(Error, Debug)]
pub enum DirxError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors related to writing the record exports.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to write.
    #[error("no records to export")]
    NoRecords,

    /// Failed to create or write an output file.
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the JSON document.
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write the CSV table.
    #[error("failed to write table: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to build or save the spreadsheet.
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for the dirx library.
pub type Result<T> = std::result::Result<T, DirxError>;
