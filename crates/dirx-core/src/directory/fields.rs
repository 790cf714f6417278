//! Field parsing for a record body: labeled contact fields and the unlabeled top section.

use regex::Regex;

use super::patterns::{EMAIL, FAX_OFFICE, LABEL_WITH_COLON, PRODUCT, TELEPHONE_OFFICE, WEBSITE};
use super::FieldExtractor;

/// Contact labels recognized in a record body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLabel {
    TelephoneOffice,
    FaxOffice,
    Email,
    Website,
    Product,
}

impl FieldLabel {
    /// All labels.
    pub const ALL: [FieldLabel; 5] = [
        FieldLabel::TelephoneOffice,
        FieldLabel::FaxOffice,
        FieldLabel::Email,
        FieldLabel::Website,
        FieldLabel::Product,
    ];

    /// Label as printed in listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldLabel::TelephoneOffice => "Tel (Off)",
            FieldLabel::FaxOffice => "Fax (Off)",
            FieldLabel::Email => "Email",
            FieldLabel::Website => "Website",
            FieldLabel::Product => "Product",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            FieldLabel::TelephoneOffice => &*TELEPHONE_OFFICE,
            FieldLabel::FaxOffice => &*FAX_OFFICE,
            FieldLabel::Email => &*EMAIL,
            FieldLabel::Website => &*WEBSITE,
            FieldLabel::Product => &*PRODUCT,
        }
    }
}

/// Extracts the value of one label from a record body.
pub struct LabelExtractor {
    label: FieldLabel,
}

impl LabelExtractor {
    pub fn new(label: FieldLabel) -> Self {
        Self { label }
    }
}

impl FieldExtractor for LabelExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.label
            .pattern()
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| flatten(m.as_str().trim()))
    }
}

/// Fields derived from a record body. Missing values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyFields {
    pub managing_director_name: String,
    pub managing_director_title: String,
    pub address: String,
    pub telephone_office: String,
    pub fax_office: String,
    pub email: String,
    pub website: String,
    pub product: String,
}

/// Replace line breaks inside a field value with `", "`.
pub fn flatten(value: &str) -> String {
    value.replace('\n', ", ")
}

/// The body before the first `label:`; the whole body when there is none.
pub fn top_section(body: &str) -> &str {
    match LABEL_WITH_COLON.find(body) {
        Some(m) => body[..m.start()].trim(),
        None => body.trim(),
    }
}

/// Split the top section into director name, director title and address.
pub fn parse_top_section(top: &str) -> (String, String, String) {
    let lines: Vec<&str> = top
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let Some((director, rest)) = lines.split_first() else {
        return Default::default();
    };

    let (name, title) = match director.rfind(',') {
        Some(comma) => (director[..comma].trim(), director[comma + 1..].trim()),
        None => (*director, ""),
    };

    (name.to_string(), title.to_string(), rest.join(" "))
}

/// Parse every field of a record body.
pub fn parse_fields(body: &str) -> BodyFields {
    let value = |label| LabelExtractor::new(label).extract(body).unwrap_or_default();
    let (name, title, address) = parse_top_section(top_section(body));

    BodyFields {
        managing_director_name: flatten(&name),
        managing_director_title: flatten(&title),
        address: flatten(&address),
        telephone_office: value(FieldLabel::TelephoneOffice),
        fax_office: value(FieldLabel::FaxOffice),
        email: value(FieldLabel::Email),
        website: value(FieldLabel::Website),
        product: value(FieldLabel::Product),
    }
}
