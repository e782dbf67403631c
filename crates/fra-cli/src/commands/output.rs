//! Rendering of extracted records.

use fra_core::extract::RuleHit;
use fra_core::models::ExtractedClaim;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub const CLAIM_COLUMNS: [&str; 12] = [
    "document_type",
    "issue_date",
    "district",
    "tehsil",
    "pattal_holder_name",
    "father_name",
    "village",
    "tribe",
    "total_area",
    "survey_number",
    "land_type",
    "status",
];

/// Values of `claim` in [`CLAIM_COLUMNS`] order.
pub fn claim_row(claim: &ExtractedClaim) -> [String; 12] {
    [
        claim.document_type.clone(),
        claim.issue_date.clone(),
        claim.district.clone(),
        claim.tehsil.clone(),
        claim.pattal_holder_name.clone(),
        claim.father_name.clone(),
        claim.village.clone(),
        claim.tribe.clone(),
        claim.total_area.clone(),
        claim.survey_number.clone(),
        claim.land_type.map(|t| t.label().to_string()).unwrap_or_default(),
        claim.status.to_string(),
    ]
}

pub fn format_claim(claim: &ExtractedClaim, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(claim)?),
        OutputFormat::Csv => format_csv(claim),
        OutputFormat::Text => Ok(format_text(claim)),
    }
}

fn format_csv(claim: &ExtractedClaim) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CLAIM_COLUMNS)?;
    wtr.write_record(claim_row(claim))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(claim: &ExtractedClaim) -> String {
    let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
    let mut output = String::new();

    output.push_str(&format!("{}\n", claim.document_type));
    output.push_str(&format!("Issued: {}\n", or_dash(&claim.issue_date)));
    output.push('\n');

    output.push_str("Patta holder:\n");
    output.push_str(&format!("  {}\n", or_dash(&claim.pattal_holder_name)));
    output.push_str(&format!("  Father: {}\n", or_dash(&claim.father_name)));
    output.push_str(&format!("  Tribe:  {}\n", or_dash(&claim.tribe)));
    output.push('\n');

    output.push_str("Location:\n");
    output.push_str(&format!("  Village:  {}\n", or_dash(&claim.village)));
    output.push_str(&format!("  Tehsil:   {}\n", or_dash(&claim.tehsil)));
    output.push_str(&format!("  District: {}\n", or_dash(&claim.district)));
    output.push('\n');

    output.push_str("Land:\n");
    let area = if claim.total_area.is_empty() {
        "-".to_string()
    } else {
        format!("{} ha", claim.total_area)
    };
    output.push_str(&format!("  Area:   {}\n", area));
    output.push_str(&format!("  Survey: {}\n", or_dash(&claim.survey_number)));
    output.push_str(&format!(
        "  Type:   {}\n",
        claim.land_type.map(|t| t.label()).unwrap_or("-")
    ));
    output.push('\n');

    output.push_str(&format!("Status: {}\n", claim.status));

    output
}

/// One line per rule hit: line number, rule, captured value, source line.
pub fn format_hits(hits: &[RuleHit]) -> String {
    hits.iter()
        .map(|hit| {
            format!(
                "{:>4}  {:<14} {:<20} <- {}\n",
                hit.line_index + 1,
                hit.rule,
                hit.value.as_text(),
                hit.source
            )
        })
        .collect()
}
