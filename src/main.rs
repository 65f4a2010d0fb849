use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use stpp_fragments::application::billing::Billing;
use stpp_fragments::application::fragment::Fragment;
use stpp_fragments::domain::record::BillingRecord;
use stpp_fragments::infrastructure::document::Document;
use stpp_fragments::interfaces::csv::record_reader::RecordReader;
use stpp_fragments::interfaces::json::record_reader::read_records;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file of billing records
    input: PathBuf,

    /// Input format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let file = File::open(&cli.input).into_diagnostic()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.format {
        Format::Csv => {
            let reader = RecordReader::new(file);
            for (index, record) in reader.records().enumerate() {
                match record {
                    Ok(record) => emit(&mut out, index + 1, &record)?,
                    Err(e) => eprintln!("Error reading record {}: {}", index + 1, e),
                }
            }
        }
        Format::Json => {
            let records = read_records(file).into_diagnostic()?;
            for (index, record) in records.into_iter().enumerate() {
                match record {
                    Ok(record) => emit(&mut out, index + 1, &record)?,
                    Err(e) => eprintln!("Error reading record {}: {}", index + 1, e),
                }
            }
        }
    }

    out.flush().into_diagnostic()?;
    Ok(())
}

/// Compiles one record into a `<billing>` document and prints it on its own line.
fn emit(out: &mut impl Write, number: usize, record: &BillingRecord) -> Result<()> {
    let mut billing = Billing::new();
    if let Err(e) = billing.apply(record) {
        eprintln!("Error building record {}: {}", number, e);
        return Ok(());
    }

    let mut doc = Document::new("billing");
    let root = doc.root();
    if !billing.compile(&mut doc, root) {
        tracing::warn!(record = number, "record has no billing fields");
    }
    writeln!(out, "{}", doc.to_xml()).into_diagnostic()?;
    Ok(())
}
