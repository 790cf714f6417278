//! Core library for company directory extraction from two-column PDFs.
//!
//! This crate provides:
//! - PDF text extraction with each page read as a left and a right half
//! - Record segmentation on `(index) Name (Reg.# number)` listing heads
//! - Contact field parsing (telephone, fax, email, website, product, director, address)
//! - JSON and CSV export of the sorted record list

pub mod directory;
pub mod error;
pub mod export;
pub mod models;
pub mod pdf;
pub mod pipeline;

pub use directory::{DirectoryParser, ExtractionResult, RecordParser};
pub use error::{DirxError, ExportError, PdfError, Result};
pub use export::{export, ExportSummary};
pub use models::config::DirxConfig;
pub use models::record::{Record, RecordDocument, SCHEMA};
pub use pdf::{PageColumns, PdfContent, PdfExtractor, PdfProcessor};
pub use pipeline::{extract_file, extract_records};
