//! JSON, spreadsheet and CSV export of the record collection.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ExportError;
use crate::models::config::OutputConfig;
use crate::models::record::{sort_records, Record, RecordDocument, SCHEMA};

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Files written by [`export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub json_path: PathBuf,
    pub workbook_path: PathBuf,
    pub table_path: PathBuf,
    pub record_count: usize,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Serialize `{"schema": [...], "records": [...]}` with four-space indentation.
pub fn write_json_to<W: Write>(writer: W, records: &[Record]) -> serde_json::Result<()> {
    let document = RecordDocument::new(records.to_vec());
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    document.serialize(&mut serializer)
}

/// Write the JSON document to `path`.
pub fn write_json(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);
    write_json_to(&mut writer, records)?;
    writer.flush().map_err(io_error(path))?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Write a single-sheet workbook: a bold header row with the schema columns, then one row per record.
///
/// `record_index` is stored as a number; empty values are left as blank cells.
pub fn write_workbook(path: &Path, records: &[Record]) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, name) in SCHEMA.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_number(row, 0, record.record_index as f64)?;
        for (col, value) in record.row(&SCHEMA).iter().enumerate().skip(1) {
            if !value.is_empty() {
                worksheet.write_string(row, col as u16, value)?;
            }
        }
    }

    workbook.save(path)?;
    debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Write one header row with the schema columns and one row per record.
pub fn write_table(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path).map_err(io_error(path))?;
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record(SCHEMA)?;
    for record in records {
        wtr.write_record(record.row(&SCHEMA))?;
    }

    wtr.flush().map_err(io_error(path))?;
    debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Sort records by index and write the JSON, workbook and CSV exports into `config.dir`.
///
/// Nothing is written for an empty collection.
pub fn export(mut records: Vec<Record>, config: &OutputConfig) -> Result<ExportSummary> {
    if records.is_empty() {
        return Err(ExportError::NoRecords);
    }

    sort_records(&mut records);

    fs::create_dir_all(&config.dir).map_err(io_error(&config.dir))?;
    let json_path = config.json_path();
    let workbook_path = config.workbook_path();
    let table_path = config.table_path();

    write_json(&json_path, &records)?;
    write_workbook(&workbook_path, &records)?;
    write_table(&table_path, &records)?;

    info!(
        "Exported {} records to {}",
        records.len(),
        config.dir.display()
    );

    Ok(ExportSummary {
        json_path,
        workbook_path,
        table_path,
        record_count: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(index: u64, name: &str) -> Record {
        Record {
            record_index: index,
            company_name: name.to_string(),
            registration_number: format!("{:04}", index),
            ..Default::default()
        }
    }

    fn config_in(dir: &Path) -> OutputConfig {
        OutputConfig {
            dir: dir.join("out"),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_collection_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let err = export(Vec::new(), &config).unwrap_err();
        assert!(matches!(err, ExportError::NoRecords));
        assert!(!config.dir.exists());
    }

    #[test]
    fn test_json_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        write_json(&path, &[record(1, "Zürich Mills")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n    \"schema\": [\n        \"record_index\","));
        assert!(content.contains("\"company_name\": \"Zürich Mills\""));
        assert!(content.contains("\"registration_number\": \"0001\""));
        let schema_pos = content.find("\"schema\"").unwrap();
        let records_pos = content.find("\"records\"").unwrap();
        assert!(schema_pos < records_pos);
    }

    #[test]
    fn test_table_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let mut with_comma = record(2, "Beta, Gamma & Co");
        with_comma.address = "1 Road City, Country".to_string();
        write_table(&path, &[record(1, "Alpha"), with_comma]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, SCHEMA.iter().map(|s| s.to_string()).collect::<Vec<_>>());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][1], "Beta, Gamma & Co");
        assert_eq!(&rows[1][5], "1 Road City, Country");
        assert_eq!(&rows[0][6], "");
    }

    #[test]
    fn test_workbook_header_and_rows() {
        use calamine::{open_workbook, Data, Reader, Xlsx};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.xlsx");
        let mut acme = record(12, "Acme, \"Best\" Corp");
        acme.email = "info@acme.test".to_string();
        write_workbook(&path, &[acme]).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range("Sheet1").unwrap();
        let rows: Vec<&[Data]> = range.rows().collect();

        assert_eq!(rows.len(), 2);
        let header: Vec<String> = rows[0].iter().map(|c| c.to_string()).collect();
        assert_eq!(header, SCHEMA.iter().map(|s| s.to_string()).collect::<Vec<_>>());

        assert_eq!(rows[1][0], Data::Float(12.0));
        assert_eq!(rows[1][1], Data::String("Acme, \"Best\" Corp".to_string()));
        assert_eq!(rows[1][2], Data::String("0012".to_string()));
        assert_eq!(rows[1][3], Data::Empty);
        assert_eq!(rows[1][8], Data::String("info@acme.test".to_string()));
    }

    #[test]
    fn test_open_failure_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("data.csv");

        let err = write_table(&path, &[record(1, "A")]).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(err.to_string().contains("data.csv"));
    }

    #[test]
    fn test_json_writer_matches_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let records = [record(1, "A"), record(2, "B")];
        write_json(&path, &records).unwrap();

        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &records).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), fs::read_to_string(&path).unwrap());
    }

    #[test]
    fn test_export_sorts_by_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let summary = export(
            vec![record(5, "E"), record(1, "A"), record(3, "C")],
            &config,
        )
        .unwrap();
        assert_eq!(summary.record_count, 3);
        assert!(summary.workbook_path.ends_with("data.xlsx"));
        assert!(summary.workbook_path.exists());

        let document: RecordDocument =
            serde_json::from_str(&fs::read_to_string(&summary.json_path).unwrap()).unwrap();
        let indices: Vec<u64> = document.records.iter().map(|r| r.record_index).collect();
        assert_eq!(indices, vec![1, 3, 5]);
        assert_eq!(document.schema, SCHEMA.to_vec());
    }
}
