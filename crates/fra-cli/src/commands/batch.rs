//! Batch command - extract claim records from many text files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use fra_core::digitize::{DigitizeResponse, digitize_with};
use fra_core::extract::LinePairExtractor;
use fra_core::models::{ExtractedClaim, ExtractionConfig};

use super::config::load_config;
use super::output::{CLAIM_COLUMNS, OutputFormat, claim_row, format_claim};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern of text files
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

enum Outcome {
    Extracted(ExtractedClaim),
    /// No patta holder, village or district found.
    Insufficient,
    Failed(String),
}

impl Outcome {
    fn status(&self) -> &'static str {
        match self {
            Outcome::Extracted(_) => "success",
            Outcome::Insufficient => "insufficient",
            Outcome::Failed(_) => "error",
        }
    }
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    outcome: Outcome,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let extractor =
        LinePairExtractor::new().with_document_type(config.extraction.document_type.as_str());
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = match process_single_file(&path, &extractor, &config.extraction) {
            Ok(response) => match response.extracted_data {
                Some(claim) => Outcome::Extracted(claim),
                None => {
                    warn!("Insufficient data in {}", path.display());
                    Outcome::Insufficient
                }
            },
            Err(e) => {
                let error_msg = e.to_string();
                if !args.continue_on_error {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
                warn!("Failed to process {}: {}", path.display(), error_msg);
                Outcome::Failed(error_msg)
            }
        };

        results.push(FileResult {
            path,
            outcome,
            processing_time_ms: file_start.elapsed().as_millis() as u64,
        });
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let summary_path = args.summary.then(|| {
        args.output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"))
    });

    if let Some(output_dir) = &args.output_dir {
        let mut used: HashSet<PathBuf> = summary_path.iter().cloned().collect();
        for result in &results {
            if let Outcome::Extracted(claim) = &result.outcome {
                let stem = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("claim");
                let output_path =
                    unique_output_path(output_dir, stem, args.format.extension(), &mut used);
                fs::write(&output_path, format_claim(claim, args.format)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if let Some(summary_path) = summary_path {
        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let count = |status: &str| results.iter().filter(|r| r.outcome.status() == status).count();

    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} extracted, {} need manual entry, {} failed",
        style(count("success")).green(),
        style(count("insufficient")).yellow(),
        style(count("error")).red()
    );

    let failed: Vec<_> = results
        .iter()
        .filter_map(|r| match &r.outcome {
            Outcome::Failed(msg) => Some((&r.path, msg)),
            _ => None,
        })
        .collect();
    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for (path, msg) in failed {
            println!("  - {}: {}", path.display(), msg);
        }
    }

    Ok(())
}

/// `dir/stem.ext`, or `dir/stem-N.ext` with the first N that is not taken yet.
fn unique_output_path(
    dir: &Path,
    stem: &str,
    extension: &str,
    used: &mut HashSet<PathBuf>,
) -> PathBuf {
    let mut path = dir.join(format!("{}.{}", stem, extension));
    let mut n = 2;
    while used.contains(&path) {
        path = dir.join(format!("{}-{}.{}", stem, n, extension));
        n += 1;
    }
    used.insert(path.clone());
    path
}

fn process_single_file(
    path: &Path,
    extractor: &LinePairExtractor,
    config: &ExtractionConfig,
) -> anyhow::Result<DigitizeResponse> {
    let text = fs::read_to_string(path)?;
    Ok(digitize_with(extractor, &text, config))
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["filename", "status"];
    header.extend(CLAIM_COLUMNS);
    header.extend(["processing_time_ms", "error"]);
    wtr.write_record(&header)?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();

        let (fields, error) = match &result.outcome {
            Outcome::Extracted(claim) => (claim_row(claim).to_vec(), String::new()),
            Outcome::Insufficient => (vec![String::new(); CLAIM_COLUMNS.len()], String::new()),
            Outcome::Failed(msg) => (vec![String::new(); CLAIM_COLUMNS.len()], msg.clone()),
        };

        let mut record = vec![filename, result.outcome.status().to_string()];
        record.extend(fields);
        record.push(result.processing_time_ms.to_string());
        record.push(error);
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
