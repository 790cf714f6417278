//! Directory record model and the fixed export schema.

use serde::{Deserialize, Serialize};

/// Column names of the exported record, in output order.
pub const SCHEMA: [&str; 11] = [
    "record_index",
    "company_name",
    "registration_number",
    "managing_director_name",
    "managing_director_title",
    "address",
    "telephone_office",
    "fax_office",
    "email",
    "website",
    "product",
];

/// A single company listing.
///
/// Field order matches [`SCHEMA`] so serialized objects list keys in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Index printed in front of the listing, e.g. `(12)`. Used as the sort key.
    pub record_index: u64,

    /// Company name as printed before the registration marker.
    pub company_name: String,

    /// Registration number, kept verbatim.
    pub registration_number: String,

    /// Managing director name (first unlabeled line, before the last comma).
    #[serde(default)]
    pub managing_director_name: String,

    /// Managing director title (after the last comma of the first line).
    #[serde(default)]
    pub managing_director_title: String,

    /// Remaining unlabeled lines joined with spaces.
    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub telephone_office: String,

    #[serde(default)]
    pub fax_office: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub website: String,

    #[serde(default)]
    pub product: String,
}

impl Record {
    /// Value of a schema column rendered as a string.
    ///
    /// Returns `None` for a column that is not part of [`SCHEMA`].
    pub fn value(&self, column: &str) -> Option<String> {
        let value = match column {
            "record_index" => return Some(self.record_index.to_string()),
            "company_name" => &self.company_name,
            "registration_number" => &self.registration_number,
            "managing_director_name" => &self.managing_director_name,
            "managing_director_title" => &self.managing_director_title,
            "address" => &self.address,
            "telephone_office" => &self.telephone_office,
            "fax_office" => &self.fax_office,
            "email" => &self.email,
            "website" => &self.website,
            "product" => &self.product,
            _ => return None,
        };
        Some(value.clone())
    }

    /// Row of values for the given columns, unknown columns filled with `""`.
    pub fn row(&self, columns: &[&str]) -> Vec<String> {
        columns
            .iter()
            .map(|c| self.value(c).unwrap_or_default())
            .collect()
    }
}

/// The JSON interchange document: the schema plus the ordered records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDocument {
    pub schema: Vec<String>,
    pub records: Vec<Record>,
}

impl RecordDocument {
    /// Build a document over already sorted records.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            schema: SCHEMA.iter().map(|s| s.to_string()).collect(),
            records,
        }
    }
}

/// Sort records ascending by index, keeping extraction order for ties.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by_key(|r| r.record_index);
}
