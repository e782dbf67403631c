//! Records command - list and edit stored claims, assets, recommendations and villages.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use uuid::Uuid;

use fra_core::error::StoreError;
use fra_core::extract::{ClaimExtractor, LinePairExtractor};
use fra_core::models::{
    Asset, AssetType, ClaimStatus, FraClaim, FraConfig, NewAsset, NewFraClaim, NewRecommendation,
    NewVillage, Priority, Recommendation, Village,
};
use fra_core::store::{MemoryStore, Storage};

use super::config::{default_data_file, load_config};

/// Arguments for the records command.
#[derive(Args)]
pub struct RecordsArgs {
    /// Record snapshot file (default: from config, then the user data directory)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    kind: RecordKind,
}

#[derive(Subcommand)]
enum RecordKind {
    /// Forest-rights claims
    Claims {
        #[command(subcommand)]
        command: ClaimCommand,
    },

    /// Mapped assets
    Assets {
        #[command(subcommand)]
        command: AssetCommand,
    },

    /// Scheme recommendations
    Recommendations {
        #[command(subcommand)]
        command: RecommendationCommand,
    },

    /// Villages
    Villages {
        #[command(subcommand)]
        command: VillageCommand,
    },
}

#[derive(Args)]
struct ListOptions {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum ClaimCommand {
    /// List claims
    List {
        #[arg(long)]
        village: Option<String>,
        /// pending, granted, rejected or under_review
        #[arg(long)]
        status: Option<ClaimStatus>,
        #[command(flatten)]
        options: ListOptions,
    },

    /// Show one claim
    Show { id: Uuid },

    /// Add claims from a JSON file (one object or an array)
    Add { file: PathBuf },

    /// Extract a claim from recognized text and store it
    Import {
        /// Text file, or "-" for stdin
        input: String,
    },

    /// Change the status of a claim
    SetStatus { id: Uuid, status: ClaimStatus },
}

#[derive(Subcommand)]
enum AssetCommand {
    /// List assets
    List {
        #[arg(long)]
        village: Option<String>,
        /// pond, farm, forest or settlement
        #[arg(long = "type")]
        asset_type: Option<AssetType>,
        #[command(flatten)]
        options: ListOptions,
    },

    /// Show one asset
    Show { id: Uuid },

    /// Add assets from a JSON file (one object or an array)
    Add { file: PathBuf },
}

#[derive(Subcommand)]
enum RecommendationCommand {
    /// List recommendations
    List {
        #[arg(long)]
        village: Option<String>,
        /// high, medium or low
        #[arg(long)]
        priority: Option<Priority>,
        #[command(flatten)]
        options: ListOptions,
    },

    /// Show one recommendation
    Show { id: Uuid },

    /// Add recommendations from a JSON file (one object or an array)
    Add { file: PathBuf },
}

#[derive(Subcommand)]
enum VillageCommand {
    /// List villages
    List {
        #[arg(long)]
        district: Option<String>,
        #[command(flatten)]
        options: ListOptions,
    },

    /// Show one village
    Show { id: Uuid },

    /// Add villages from a JSON file (one object or an array)
    Add { file: PathBuf },
}

pub async fn run(args: RecordsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let (store, path) = open_store(args.data_file.as_deref(), &config)?;

    let changed = match args.kind {
        RecordKind::Claims { command } => run_claims(command, &store, &config)?,
        RecordKind::Assets { command } => run_assets(command, &store)?,
        RecordKind::Recommendations { command } => run_recommendations(command, &store)?,
        RecordKind::Villages { command } => run_villages(command, &store)?,
    };

    if changed {
        store.save(&path)?;
        debug!("Saved records to {}", path.display());
    }

    Ok(())
}

/// Open the record snapshot, seeding a new store when the file does not exist yet.
pub fn open_store(
    data_file: Option<&Path>,
    config: &FraConfig,
) -> anyhow::Result<(MemoryStore, PathBuf)> {
    let path = data_file
        .map(Path::to_path_buf)
        .or_else(|| config.store.data_file.clone())
        .unwrap_or_else(default_data_file);

    let store = if path.exists() {
        MemoryStore::load(&path)?
    } else if config.store.seed_demo_data {
        info!("No records at {}, starting from demo data", path.display());
        MemoryStore::seeded()?
    } else {
        info!("No records at {}, starting empty", path.display());
        MemoryStore::new()
    };

    Ok((store, path))
}

fn run_claims(
    command: ClaimCommand,
    store: &MemoryStore,
    config: &FraConfig,
) -> anyhow::Result<bool> {
    match command {
        ClaimCommand::List {
            village,
            status,
            options,
        } => {
            let mut claims = match &village {
                Some(village) => store.claims_by_village(village),
                None => store.claims(),
            };
            if let Some(status) = status {
                claims.retain(|c| c.status == status);
            }
            print_list(&claims, &options, claim_line)?;
            Ok(false)
        }
        ClaimCommand::Show { id } => {
            let claim = store.claim(id).ok_or_else(|| not_found("claim", id))?;
            println!("{}", serde_json::to_string_pretty(&claim)?);
            Ok(false)
        }
        ClaimCommand::Add { file } => {
            let created = add_all(read_records::<NewFraClaim>(&file)?, |c| store.create_claim(c))?;
            report_added("claims", created.len());
            Ok(true)
        }
        ClaimCommand::Import { input } => {
            let text = if input == "-" {
                std::io::read_to_string(std::io::stdin())?
            } else {
                fs::read_to_string(&input)?
            };

            let extractor = LinePairExtractor::new()
                .with_document_type(config.extraction.document_type.as_str());
            let extracted = extractor.extract(&text);
            if !extracted.has_identity() {
                anyhow::bail!(
                    "No patta holder, village or district found in {}; enter the claim manually",
                    input
                );
            }

            let claim = store.create_claim(extracted.to_new_claim()?)?;
            println!(
                "{} Imported claim {} for {}",
                style("✓").green(),
                claim.id,
                claim.pattal_holder_name
            );
            Ok(true)
        }
        ClaimCommand::SetStatus { id, status } => {
            let claim = store
                .update_claim_status(id, status)
                .ok_or_else(|| not_found("claim", id))?;
            println!(
                "{} Claim {} is now {}",
                style("✓").green(),
                claim.id,
                claim.status
            );
            Ok(true)
        }
    }
}

fn run_assets(command: AssetCommand, store: &MemoryStore) -> anyhow::Result<bool> {
    match command {
        AssetCommand::List {
            village,
            asset_type,
            options,
        } => {
            let mut assets = match asset_type {
                Some(asset_type) => store.assets_by_type(asset_type),
                None => store.assets(),
            };
            if let Some(village) = &village {
                assets.retain(|a| &a.village == village);
            }
            print_list(&assets, &options, asset_line)?;
            Ok(false)
        }
        AssetCommand::Show { id } => {
            let asset = store.asset(id).ok_or_else(|| not_found("asset", id))?;
            println!("{}", serde_json::to_string_pretty(&asset)?);
            Ok(false)
        }
        AssetCommand::Add { file } => {
            let created = add_all(read_records::<NewAsset>(&file)?, |a| store.create_asset(a))?;
            report_added("assets", created.len());
            Ok(true)
        }
    }
}

fn run_recommendations(
    command: RecommendationCommand,
    store: &MemoryStore,
) -> anyhow::Result<bool> {
    match command {
        RecommendationCommand::List {
            village,
            priority,
            options,
        } => {
            let mut recommendations = match &village {
                Some(village) => store.recommendations_by_village(village),
                None => store.recommendations(),
            };
            if let Some(priority) = priority {
                recommendations.retain(|r| r.priority == priority);
            }
            print_list(&recommendations, &options, recommendation_line)?;
            Ok(false)
        }
        RecommendationCommand::Show { id } => {
            let recommendation = store
                .recommendation(id)
                .ok_or_else(|| not_found("recommendation", id))?;
            println!("{}", serde_json::to_string_pretty(&recommendation)?);
            Ok(false)
        }
        RecommendationCommand::Add { file } => {
            let created = add_all(read_records::<NewRecommendation>(&file)?, |r| {
                store.create_recommendation(r)
            })?;
            report_added("recommendations", created.len());
            Ok(true)
        }
    }
}

fn run_villages(command: VillageCommand, store: &MemoryStore) -> anyhow::Result<bool> {
    match command {
        VillageCommand::List { district, options } => {
            let villages = match &district {
                Some(district) => store.villages_by_district(district),
                None => store.villages(),
            };
            print_list(&villages, &options, village_line)?;
            Ok(false)
        }
        VillageCommand::Show { id } => {
            let village = store.village(id).ok_or_else(|| not_found("village", id))?;
            println!("{}", serde_json::to_string_pretty(&village)?);
            Ok(false)
        }
        VillageCommand::Add { file } => {
            let created = add_all(read_records::<NewVillage>(&file)?, |v| store.create_village(v))?;
            report_added("villages", created.len());
            Ok(true)
        }
    }
}

fn not_found(kind: &'static str, id: Uuid) -> StoreError {
    StoreError::NotFound {
        kind,
        id: id.to_string(),
    }
}

/// Parse a JSON file holding either one record or an array of records.
fn read_records<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    let records = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(records)
}

/// Insert every record, stopping at the first one the store rejects.
fn add_all<N, R>(
    records: Vec<N>,
    mut create: impl FnMut(N) -> Result<R, StoreError>,
) -> anyhow::Result<Vec<R>> {
    let mut created = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let record = create(record).map_err(|e| anyhow::anyhow!("record {}: {}", index + 1, e))?;
        created.push(record);
    }
    Ok(created)
}

fn report_added(kind: &str, count: usize) {
    println!("{} Added {} {}", style("✓").green(), count, kind);
}

fn print_list<T: Serialize>(
    records: &[T],
    options: &ListOptions,
    line: fn(&T) -> String,
) -> anyhow::Result<()> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", style("No records").dim());
        return Ok(());
    }
    for record in records {
        println!("{}", line(record));
    }
    Ok(())
}

fn claim_line(claim: &FraClaim) -> String {
    format!(
        "{}  {:<24} {:<12} {:>6} ha  {}",
        claim.id,
        claim.pattal_holder_name,
        claim.village,
        claim.total_area,
        style(claim.status).cyan()
    )
}

fn asset_line(asset: &Asset) -> String {
    format!(
        "{}  {:<24} {:<10} {}",
        asset.id,
        asset.name,
        asset.asset_type.as_str(),
        asset.village
    )
}

fn recommendation_line(recommendation: &Recommendation) -> String {
    format!(
        "{}  {:<24} {:<7} {:<12} {}",
        recommendation.id,
        recommendation.scheme_name,
        recommendation.priority.as_str(),
        recommendation.village,
        if recommendation.is_active {
            style("active").green()
        } else {
            style("inactive").dim()
        }
    )
}

fn village_line(village: &Village) -> String {
    let tribal = village
        .tribal_share()
        .map(|share| format!("{:.0}% tribal", share * 100.0))
        .unwrap_or_default();
    format!(
        "{}  {:<16} {:<12} {}",
        village.id, village.name, village.district, tribal
    )
}
