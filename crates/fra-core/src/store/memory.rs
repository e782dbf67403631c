//! In-memory store with JSON snapshot persistence.

use std::path::Path;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{
    Asset, ClaimStatus, FraClaim, NewAsset, NewFraClaim, NewRecommendation, NewVillage,
    Recommendation, Village,
};

use super::{Result, Storage};

/// Every record in a store, as written to disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub claims: Vec<FraClaim>,
    pub assets: Vec<Asset>,
    pub recommendations: Vec<Recommendation>,
    pub villages: Vec<Village>,
}

/// Thread-safe in-memory [`Storage`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    claims: RwLock<Vec<FraClaim>>,
    assets: RwLock<Vec<Asset>>,
    recommendations: RwLock<Vec<Recommendation>>,
    villages: RwLock<Vec<Village>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the demo records.
    pub fn seeded() -> Result<Self> {
        let store = Self::new();
        super::seed::seed_demo_data(&store)?;
        Ok(store)
    }

    /// Create a store from previously saved records.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            claims: RwLock::new(snapshot.claims),
            assets: RwLock::new(snapshot.assets),
            recommendations: RwLock::new(snapshot.recommendations),
            villages: RwLock::new(snapshot.villages),
        }
    }

    /// Copy out every record.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            claims: read(&self.claims).clone(),
            assets: read(&self.assets).clone(),
            recommendations: read(&self.recommendations).clone(),
            villages: read(&self.villages).clone(),
        }
    }

    /// Load a store from a JSON snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Snapshot(format!("{}: {}", path.display(), e)))?;
        let snapshot: Snapshot = serde_json::from_str(&content)
            .map_err(|e| StoreError::Snapshot(format!("{}: {}", path.display(), e)))?;

        info!(
            "Loaded {} claims, {} assets, {} recommendations, {} villages from {}",
            snapshot.claims.len(),
            snapshot.assets.len(),
            snapshot.recommendations.len(),
            snapshot.villages.len(),
            path.display()
        );

        Ok(Self::from_snapshot(snapshot))
    }

    /// Write every record to a JSON snapshot file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| StoreError::Snapshot(e.to_string()))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Snapshot(format!("{}: {}", parent.display(), e)))?;
        }
        std::fs::write(path, content)
            .map_err(|e| StoreError::Snapshot(format!("{}: {}", path.display(), e)))?;

        debug!("Saved snapshot to {}", path.display());
        Ok(())
    }
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::validation(field, "required"));
    }
    Ok(())
}

fn check_coordinates(latitude: Option<Decimal>, longitude: Option<Decimal>) -> Result<()> {
    if let Some(lat) = latitude {
        if lat < Decimal::from(-90) || lat > Decimal::from(90) {
            return Err(StoreError::validation("latitude", format!("{} out of range", lat)));
        }
    }
    if let Some(lon) = longitude {
        if lon < Decimal::from(-180) || lon > Decimal::from(180) {
            return Err(StoreError::validation("longitude", format!("{} out of range", lon)));
        }
    }
    Ok(())
}

fn check_index(field: &str, value: Option<Decimal>) -> Result<()> {
    match value {
        Some(v) if v < Decimal::ZERO || v > Decimal::from(10) => {
            Err(StoreError::validation(field, format!("{} outside 0-10", v)))
        }
        _ => Ok(()),
    }
}

/// Largest `decimal(10,2)` value: claim area in hectares.
const MAX_AREA: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Largest `decimal(12,2)` value: scheme budget.
const MAX_BUDGET: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

fn check_amount(field: &str, value: Decimal, max: Decimal) -> Result<()> {
    if value.is_sign_negative() {
        return Err(StoreError::validation(field, "must not be negative"));
    }
    if value > max {
        return Err(StoreError::validation(field, format!("{} exceeds {}", value, max)));
    }
    Ok(())
}

fn validate_claim(claim: &NewFraClaim) -> Result<()> {
    require("pattalHolderName", &claim.pattal_holder_name)?;
    require("village", &claim.village)?;
    require("district", &claim.district)?;
    check_amount("totalArea", claim.total_area, MAX_AREA)?;
    check_coordinates(claim.latitude, claim.longitude)
}

fn validate_asset(asset: &NewAsset) -> Result<()> {
    require("name", &asset.name)?;
    require("village", &asset.village)?;
    require("district", &asset.district)?;
    check_coordinates(Some(asset.latitude), Some(asset.longitude))
}

fn validate_recommendation(rec: &NewRecommendation) -> Result<()> {
    require("schemeName", &rec.scheme_name)?;
    require("village", &rec.village)?;
    require("district", &rec.district)?;
    require("description", &rec.description)?;
    match rec.estimated_budget {
        Some(budget) => check_amount("estimatedBudget", budget, MAX_BUDGET),
        None => Ok(()),
    }
}

fn validate_village(village: &NewVillage) -> Result<()> {
    require("name", &village.name)?;
    require("district", &village.district)?;
    if let (Some(total), Some(tribal)) = (village.population, village.tribal_population) {
        if tribal > total {
            return Err(StoreError::validation(
                "tribalPopulation",
                format!("{} exceeds population {}", tribal, total),
            ));
        }
    }
    check_index("waterIndex", village.water_index)?;
    check_index("developmentIndex", village.development_index)?;
    check_coordinates(village.latitude, village.longitude)
}

impl Storage for MemoryStore {
    fn claims(&self) -> Vec<FraClaim> {
        read(&self.claims).clone()
    }

    fn claim(&self, id: Uuid) -> Option<FraClaim> {
        read(&self.claims).iter().find(|c| c.id == id).cloned()
    }

    fn create_claim(&self, mut claim: NewFraClaim) -> Result<FraClaim> {
        claim.total_area = claim.total_area.round_dp(2);
        validate_claim(&claim)?;
        let claim = claim.into_claim(Uuid::new_v4(), Utc::now());
        debug!("Created claim {} for {}", claim.id, claim.pattal_holder_name);
        write(&self.claims).push(claim.clone());
        Ok(claim)
    }

    fn update_claim_status(&self, id: Uuid, status: ClaimStatus) -> Option<FraClaim> {
        let mut claims = write(&self.claims);
        let claim = claims.iter_mut().find(|c| c.id == id)?;
        debug!("Claim {} status {} -> {}", id, claim.status, status);
        claim.status = status;
        Some(claim.clone())
    }

    fn assets(&self) -> Vec<Asset> {
        read(&self.assets).clone()
    }

    fn asset(&self, id: Uuid) -> Option<Asset> {
        read(&self.assets).iter().find(|a| a.id == id).cloned()
    }

    fn create_asset(&self, asset: NewAsset) -> Result<Asset> {
        validate_asset(&asset)?;
        let asset = asset.into_asset(Uuid::new_v4(), Utc::now());
        write(&self.assets).push(asset.clone());
        Ok(asset)
    }

    fn recommendations(&self) -> Vec<Recommendation> {
        read(&self.recommendations).clone()
    }

    fn recommendation(&self, id: Uuid) -> Option<Recommendation> {
        read(&self.recommendations).iter().find(|r| r.id == id).cloned()
    }

    fn create_recommendation(
        &self,
        mut recommendation: NewRecommendation,
    ) -> Result<Recommendation> {
        recommendation.estimated_budget = recommendation.estimated_budget.map(|b| b.round_dp(2));
        validate_recommendation(&recommendation)?;
        let recommendation = recommendation.into_recommendation(Uuid::new_v4(), Utc::now());
        write(&self.recommendations).push(recommendation.clone());
        Ok(recommendation)
    }

    fn villages(&self) -> Vec<Village> {
        read(&self.villages).clone()
    }

    fn village(&self, id: Uuid) -> Option<Village> {
        read(&self.villages).iter().find(|v| v.id == id).cloned()
    }

    fn create_village(&self, village: NewVillage) -> Result<Village> {
        validate_village(&village)?;
        let village = village.into_village(Uuid::new_v4(), Utc::now());
        write(&self.villages).push(village.clone());
        Ok(village)
    }
}
