//! Stats command - dashboard numbers over the stored records.

use std::path::PathBuf;

use clap::Args;
use console::style;

use fra_core::stats::DashboardStats;

use super::config::load_config;
use super::records::open_store;

/// Arguments for the stats command.
#[derive(Args)]
pub struct StatsArgs {
    /// Record snapshot file
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Print JSON instead of a summary
    #[arg(long)]
    json: bool,
}

pub async fn run(args: StatsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let (store, _) = open_store(args.data_file.as_deref(), &config)?;
    let stats = DashboardStats::collect(&store);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", style("Claims").bold());
    println!("  Total:        {}", stats.total_claims);
    println!("  Granted:      {}", style(stats.granted_claims).green());
    println!("  Pending:      {}", style(stats.pending_claims).yellow());
    println!("  Under review: {}", stats.under_review_claims);
    println!("  Rejected:     {}", style(stats.rejected_claims).red());
    println!("  Granted area: {} ha", stats.granted_area);
    println!();

    println!("{}", style("Assets").bold());
    println!("  Total:      {}", stats.total_assets);
    println!("  Ponds:      {}", stats.assets_by_type.pond);
    println!("  Farms:      {}", stats.assets_by_type.farm);
    println!("  Forest:     {}", stats.assets_by_type.forest);
    println!("  Settlement: {}", stats.assets_by_type.settlement);
    println!();

    println!("{}", style("Recommendations").bold());
    println!(
        "  Total: {} ({} active)",
        stats.total_recommendations, stats.active_recommendations
    );
    println!(
        "  High: {}, medium: {}, low: {}",
        stats.recommendations_by_priority.high,
        stats.recommendations_by_priority.medium,
        stats.recommendations_by_priority.low
    );
    println!();

    println!("{}", style("Villages").bold());
    println!("  Total: {}", stats.total_villages);
    for (district, count) in &stats.villages_by_district {
        println!("  {}: {}", district, count);
    }

    Ok(())
}
