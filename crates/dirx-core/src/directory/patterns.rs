//! Regex patterns for directory listing extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Alternation of every contact label, unanchored.
const LABELS: &str = r"Tel \(Off\)|Fax \(Off\)|Email|Website|Product";

/// Value of `label`: text after `label:` up to the next label or the end of the body.
fn labeled_value(label: &str) -> Regex {
    Regex::new(&format!(r"(?is){}\s*:\s*(.*?)(?:{}|\z)", label, LABELS)).unwrap()
}

lazy_static! {
    // Record head: "(12) Company Name (Reg.# 3456)". The name may span lines.
    pub static ref RECORD_HEAD: Regex = Regex::new(
        r"(?s)\A\((\d+)\)\s+(.+?)\s+\(Reg\.#\s*(\d+)\)"
    ).unwrap();

    // Any contact label followed by a colon; marks the end of the top section.
    pub static ref LABEL_WITH_COLON: Regex = Regex::new(
        &format!(r"(?i)(?:{})\s*:", LABELS)
    ).unwrap();

    // Labeled contact fields
    pub static ref TELEPHONE_OFFICE: Regex = labeled_value(r"Tel \(Off\)");

    pub static ref FAX_OFFICE: Regex = labeled_value(r"Fax \(Off\)");

    pub static ref EMAIL: Regex = labeled_value("Email");

    pub static ref WEBSITE: Regex = labeled_value("Website");

    pub static ref PRODUCT: Regex = labeled_value("Product");
}
