//! Record store for claims, assets, recommendations and villages.

mod memory;
pub mod seed;

pub use memory::{MemoryStore, Snapshot};

use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{
    Asset, AssetType, ClaimStatus, FraClaim, NewAsset, NewFraClaim, NewRecommendation,
    NewVillage, Priority, Recommendation, Village,
};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage backend for land records.
///
/// Listing methods return records in insertion order. The filtered
/// listings have default implementations over the full listings; backends
/// with indexes can override them.
pub trait Storage {
    // Claims
    fn claims(&self) -> Vec<FraClaim>;
    fn claim(&self, id: Uuid) -> Option<FraClaim>;
    fn create_claim(&self, claim: NewFraClaim) -> Result<FraClaim>;
    /// Change a claim's status. `None` when no claim has that id.
    fn update_claim_status(&self, id: Uuid, status: ClaimStatus) -> Option<FraClaim>;

    fn claims_by_village(&self, village: &str) -> Vec<FraClaim> {
        self.claims().into_iter().filter(|c| c.village == village).collect()
    }

    fn claims_by_status(&self, status: ClaimStatus) -> Vec<FraClaim> {
        self.claims().into_iter().filter(|c| c.status == status).collect()
    }

    // Assets
    fn assets(&self) -> Vec<Asset>;
    fn asset(&self, id: Uuid) -> Option<Asset>;
    fn create_asset(&self, asset: NewAsset) -> Result<Asset>;

    fn assets_by_village(&self, village: &str) -> Vec<Asset> {
        self.assets().into_iter().filter(|a| a.village == village).collect()
    }

    fn assets_by_type(&self, asset_type: AssetType) -> Vec<Asset> {
        self.assets().into_iter().filter(|a| a.asset_type == asset_type).collect()
    }

    // Recommendations
    fn recommendations(&self) -> Vec<Recommendation>;
    fn recommendation(&self, id: Uuid) -> Option<Recommendation>;
    fn create_recommendation(&self, recommendation: NewRecommendation) -> Result<Recommendation>;

    fn recommendations_by_village(&self, village: &str) -> Vec<Recommendation> {
        self.recommendations()
            .into_iter()
            .filter(|r| r.village == village)
            .collect()
    }

    fn recommendations_by_priority(&self, priority: Priority) -> Vec<Recommendation> {
        self.recommendations()
            .into_iter()
            .filter(|r| r.priority == priority)
            .collect()
    }

    // Villages
    fn villages(&self) -> Vec<Village>;
    fn village(&self, id: Uuid) -> Option<Village>;
    fn create_village(&self, village: NewVillage) -> Result<Village>;

    fn villages_by_district(&self, district: &str) -> Vec<Village> {
        self.villages().into_iter().filter(|v| v.district == district).collect()
    }
}
