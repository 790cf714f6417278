//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::DirxError;

/// Main configuration for the dirx pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirxConfig {
    /// Input discovery configuration.
    pub input: InputConfig,

    /// Output file configuration.
    pub output: OutputConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

/// Where input documents are looked up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Directory scanned for input documents.
    pub dir: PathBuf,

    /// File name glob applied inside `dir`.
    pub pattern: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("input"),
            pattern: "*.pdf".to_string(),
        }
    }
}

/// Where and how the exports are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the export files.
    pub dir: PathBuf,

    /// JSON document file name.
    pub json_file: String,

    /// Spreadsheet (xlsx) file name.
    pub workbook_file: String,

    /// Tabular (CSV) file name.
    pub table_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            json_file: "data.json".to_string(),
            workbook_file: "data.xlsx".to_string(),
            table_file: "data.csv".to_string(),
        }
    }
}

impl OutputConfig {
    /// Full path of the JSON export.
    pub fn json_path(&self) -> PathBuf {
        self.dir.join(&self.json_file)
    }

    /// Full path of the spreadsheet export.
    pub fn workbook_path(&self) -> PathBuf {
        self.dir.join(&self.workbook_file)
    }

    /// Full path of the CSV export.
    pub fn table_path(&self) -> PathBuf {
        self.dir.join(&self.table_file)
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Extract the left and right page halves separately.
    pub split_columns: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            split_columns: true,
        }
    }
}

impl DirxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Check values that would make a run write nonsense.
    pub fn validate(&self) -> crate::Result<()> {
        if self.input.pattern.trim().is_empty() {
            return Err(DirxError::Config("input.pattern is empty".to_string()));
        }
        let output = &self.output;
        let names = [&output.json_file, &output.workbook_file, &output.table_file];
        if names.iter().any(|name| name.is_empty()) {
            return Err(DirxError::Config("output file names must not be empty".to_string()));
        }
        for (i, name) in names.iter().enumerate() {
            if names[i + 1..].contains(name) {
                return Err(DirxError::Config(format!(
                    "output file name '{}' is used twice",
                    name
                )));
            }
        }
        Ok(())
    }
}
