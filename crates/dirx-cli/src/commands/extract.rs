//! Extract command - every matching PDF in the input directory into one export.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::{glob, Pattern};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use dirx_core::{export, extract_file, DirectoryParser, DirxConfig, ExportError, Record};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Directory containing the PDF files (default: input.dir from config)
    input_dir: Option<PathBuf>,

    /// Directory receiving data.json, data.xlsx and data.csv (default: output.dir from config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// File name pattern inside the input directory
    #[arg(short, long)]
    pattern: Option<String>,
}

/// A file that could not be processed.
struct Failure {
    path: PathBuf,
    error: String,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut config = super::load_config(config_path)?;

    if let Some(dir) = args.input_dir {
        config.input.dir = dir;
    }
    if let Some(dir) = args.output_dir {
        config.output.dir = dir;
    }
    if let Some(pattern) = args.pattern {
        config.input.pattern = pattern;
    }

    let files = discover(&config.input.dir, &config.input.pattern)?;

    if files.is_empty() {
        println!(
            "{} No PDF files found in {}",
            style("ℹ").blue(),
            config.input.dir.display()
        );
        return Ok(());
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let (records, failures) = extract_all(&files, &config, &pb);
    pb.finish_and_clear();

    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        files.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(files.len() - failures.len()).green(),
        style(failures.len()).red()
    );

    if !failures.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for failure in &failures {
            println!("  - {}: {}", failure.path.display(), failure.error);
        }
    }

    match export(records, &config.output) {
        Ok(summary) => {
            println!(
                "{} Wrote {} records to {}, {} and {}",
                style("✓").green(),
                summary.record_count,
                summary.json_path.display(),
                summary.workbook_path.display(),
                summary.table_path.display()
            );
            Ok(())
        }
        Err(ExportError::NoRecords) => {
            println!("{} No records extracted, nothing written", style("ℹ").blue());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Files in `dir` matching `pattern`, in lexical path order.
fn discover(dir: &Path, pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!("Input directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let full_pattern = Path::new(&Pattern::escape(&dir.to_string_lossy())).join(pattern);
    let mut files: Vec<PathBuf> = glob(&full_pattern.to_string_lossy())?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    Ok(files)
}

/// Run every file through the pipeline, collecting records and failures.
fn extract_all(
    files: &[PathBuf],
    config: &DirxConfig,
    pb: &ProgressBar,
) -> (Vec<Record>, Vec<Failure>) {
    let parser = DirectoryParser::new();
    let mut records = Vec::new();
    let mut failures = Vec::new();

    for path in files {
        match extract_file(path, &parser, config.pdf.split_columns) {
            Ok(result) => {
                for warning in &result.warnings {
                    debug!("{}: {}", path.display(), warning);
                }
                records.extend(result.records);
            }
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                failures.push(Failure {
                    path: path.clone(),
                    error: e.to_string(),
                });
            }
        }
        pb.inc(1);
    }

    (records, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_sorts_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.pdf", "a.pdf", "notes.txt", "c.PDF"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("sub.pdf")).unwrap();

        let files = discover(dir.path(), "*.pdf").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let files = discover(&dir.path().join("missing"), "*.pdf").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_unreadable_file_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"not a pdf").unwrap();

        let (records, failures) =
            extract_all(&[path.clone()], &DirxConfig::default(), &ProgressBar::hidden());
        assert!(records.is_empty());
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, path);
    }
}
