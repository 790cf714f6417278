//! Directory parser: segments document text and turns every span into a [`Record`].

use tracing::{debug, info, warn};

use crate::models::record::Record;

use super::fields::parse_fields;
use super::segmenter::{segment, RawRecord};

/// Result of parsing one document's text.
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    /// Records in extraction order.
    pub records: Vec<Record>,
    /// Extraction warnings.
    pub warnings: Vec<String>,
}

/// Trait for record parsing.
pub trait RecordParser {
    /// Parse all records found in text. Text without records yields an empty result.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based parser for `(index) Name (Reg.# number)` listings.
#[derive(Debug, Clone, Default)]
pub struct DirectoryParser;

impl DirectoryParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    fn build_record(raw: &RawRecord<'_>) -> Record {
        let fields = parse_fields(raw.body);

        Record {
            record_index: raw.index,
            company_name: raw.name.to_string(),
            registration_number: raw.registration_number.to_string(),
            managing_director_name: fields.managing_director_name,
            managing_director_title: fields.managing_director_title,
            address: fields.address,
            telephone_office: fields.telephone_office,
            fax_office: fields.fax_office,
            email: fields.email,
            website: fields.website,
            product: fields.product,
        }
    }
}

impl RecordParser for DirectoryParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let text = text.replace("\r\n", "\n");

        info!("Parsing records from {} characters of text", text.len());

        let segments = segment(&text);
        let records: Vec<Record> = segments.records.iter().map(Self::build_record).collect();

        let warnings: Vec<String> = segments
            .rejected
            .iter()
            .map(|span| {
                let head = span.lines().next().unwrap_or_default();
                warn!("Skipping listing without registration marker: {}", head);
                format!("no registration marker in listing starting '{}'", head)
            })
            .collect();

        debug!(
            "Extracted {} records with {} warnings",
            records.len(),
            warnings.len()
        );

        ExtractionResult { records, warnings }
    }
}
