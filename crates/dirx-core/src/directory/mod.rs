//! Directory listing extraction: record segmentation and field parsing.

pub mod fields;
mod parser;
pub mod patterns;
pub mod segmenter;

pub use fields::{parse_fields, BodyFields, FieldLabel, LabelExtractor};
pub use parser::{DirectoryParser, ExtractionResult, RecordParser};
pub use segmenter::{segment, RawRecord, Segments};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
