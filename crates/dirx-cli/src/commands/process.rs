//! Process command - parse a single PDF file and print its records.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use dirx_core::export::{write_json, write_json_to};
use dirx_core::models::record::sort_records;
use dirx_core::{DirectoryParser, PdfExtractor, PdfProcessor, RecordParser};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the extracted column text instead of records
    #[arg(long)]
    text: bool,

    /// Read pages full-width instead of as two columns
    #[arg(long)]
    no_split: bool,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let mut extractor =
        PdfExtractor::new().with_column_split(config.pdf.split_columns && !args.no_split);
    extractor.load(&data)?;

    let content = extractor.extract_all()?;
    if !content.has_text() {
        eprintln!(
            "{} No text found in {}, it may be a scanned document",
            style("⚠").yellow(),
            args.input.display()
        );
    }

    if args.text {
        match &args.output {
            Some(path) => fs::write(path, &content.text)?,
            None => print!("{}", content.text),
        }
        return Ok(());
    }

    let result = DirectoryParser::new().parse(&content.text);
    for warning in &result.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }

    let mut records = result.records;
    sort_records(&mut records);

    if let Some(output_path) = &args.output {
        write_json(output_path, &records)?;
        println!(
            "{} {} records written to {}",
            style("✓").green(),
            records.len(),
            output_path.display()
        );
    } else {
        let mut stdout = io::stdout().lock();
        write_json_to(&mut stdout, &records)?;
        writeln!(stdout)?;
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
