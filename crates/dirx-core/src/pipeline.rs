//! Per-document pipeline: PDF bytes to parsed records.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::directory::{ExtractionResult, RecordParser};
use crate::error::Result;
use crate::pdf::{PdfExtractor, PdfProcessor};

/// Extract and parse the records of one document already behind a [`PdfProcessor`].
pub fn extract_records<P, R>(processor: &P, parser: &R) -> Result<ExtractionResult>
where
    P: PdfProcessor + ?Sized,
    R: RecordParser + ?Sized,
{
    let text = processor.extract_text()?;

    if text.trim().is_empty() {
        warn!(
            "No text in {} pages, document may be scanned",
            processor.page_count()
        );
    }

    Ok(parser.parse(&text))
}

/// Read, extract and parse one PDF file.
pub fn extract_file<R>(path: &Path, parser: &R, split_columns: bool) -> Result<ExtractionResult>
where
    R: RecordParser + ?Sized,
{
    let data = fs::read(path)?;
    let mut extractor = PdfExtractor::new().with_column_split(split_columns);
    extractor.load(&data)?;

    let result = extract_records(&extractor, parser)?;
    info!(
        "{}: {} records from {} pages",
        path.display(),
        result.records.len(),
        extractor.page_count()
    );
    Ok(result)
}
