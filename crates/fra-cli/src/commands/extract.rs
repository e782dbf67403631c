//! Extract command - pull a claim record out of one recognized text file.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use fra_core::digitize::digitize_with;
use fra_core::extract::LinePairExtractor;

use super::config::load_config;
use super::output::{OutputFormat, format_claim, format_hits};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file, or "-" for stdin
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print the digitization response instead of the bare record
    #[arg(long)]
    envelope: bool,

    /// Show which rule matched on which line
    #[arg(long)]
    explain: bool,

    /// List empty fields of the extracted record
    #[arg(long)]
    check: bool,

    /// Override the document type label
    #[arg(long)]
    document_type: Option<String>,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut config = load_config(config_path)?;
    if let Some(document_type) = &args.document_type {
        config.extraction.document_type = document_type.clone();
    }

    let text = read_input(&args.input)?;
    info!("Extracting from {} ({} bytes)", args.input, text.len());

    let extractor =
        LinePairExtractor::new().with_document_type(config.extraction.document_type.as_str());

    let output = if args.envelope {
        let response = digitize_with(&extractor, &text, &config.extraction);
        if response.needs_manual_entry() {
            eprintln!(
                "{} {}",
                style("⚠").yellow(),
                style("No patta holder, village or district found").yellow()
            );
        }
        serde_json::to_string_pretty(&response)?
    } else {
        let trace = extractor.extract_with_trace(&text);
        debug!(
            "{} rule hits over {} lines",
            trace.hits.len(),
            trace.line_count
        );

        if args.explain {
            eprintln!("{}", style("Rule hits:").bold());
            if trace.hits.is_empty() {
                eprintln!("  (none)");
            } else {
                eprint!("{}", format_hits(&trace.hits));
            }
            eprintln!();
        }

        if args.check {
            let missing = trace.claim.missing_fields();
            if !missing.is_empty() {
                eprintln!("{}", style("Missing fields:").yellow());
                for field in &missing {
                    eprintln!("  - {}", field);
                }
            }
        }

        format_claim(&trace.claim, args.format)?
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Extraction finished in {:?}", start.elapsed());
    Ok(())
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let path = PathBuf::from(input);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(fs::read_to_string(&path)?)
}
