//! Dashboard aggregation over the record store.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{AssetType, ClaimStatus, FraClaim, Priority};
use crate::store::Storage;

/// Asset counts per type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsByType {
    pub pond: usize,
    pub farm: usize,
    pub forest: usize,
    pub settlement: usize,
}

/// Recommendation counts per priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationsByPriority {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_claims: usize,
    pub granted_claims: usize,
    pub pending_claims: usize,
    pub rejected_claims: usize,
    pub under_review_claims: usize,
    /// Sum of `totalArea` over granted claims, in hectares.
    pub granted_area: Decimal,
    pub total_assets: usize,
    pub assets_by_type: AssetsByType,
    pub total_recommendations: usize,
    pub active_recommendations: usize,
    pub recommendations_by_priority: RecommendationsByPriority,
    pub total_villages: usize,
    pub villages_by_district: BTreeMap<String, usize>,
}

impl DashboardStats {
    /// Compute the statistics from everything currently in `store`.
    pub fn collect<S: Storage + ?Sized>(store: &S) -> Self {
        let claims = store.claims();
        let assets = store.assets();
        let recommendations = store.recommendations();
        let villages = store.villages();

        let count_status = |status: ClaimStatus| claims.iter().filter(|c| c.status == status).count();
        let count_assets = |t: AssetType| assets.iter().filter(|a| a.asset_type == t).count();
        let count_priority =
            |p: Priority| recommendations.iter().filter(|r| r.priority == p).count();

        let mut villages_by_district = BTreeMap::new();
        for village in &villages {
            *villages_by_district.entry(village.district.clone()).or_insert(0) += 1;
        }

        Self {
            total_claims: claims.len(),
            granted_claims: count_status(ClaimStatus::Granted),
            pending_claims: count_status(ClaimStatus::Pending),
            rejected_claims: count_status(ClaimStatus::Rejected),
            under_review_claims: count_status(ClaimStatus::UnderReview),
            granted_area: granted_area(&claims),
            total_assets: assets.len(),
            assets_by_type: AssetsByType {
                pond: count_assets(AssetType::Pond),
                farm: count_assets(AssetType::Farm),
                forest: count_assets(AssetType::Forest),
                settlement: count_assets(AssetType::Settlement),
            },
            total_recommendations: recommendations.len(),
            active_recommendations: recommendations.iter().filter(|r| r.is_active).count(),
            recommendations_by_priority: RecommendationsByPriority {
                high: count_priority(Priority::High),
                medium: count_priority(Priority::Medium),
                low: count_priority(Priority::Low),
            },
            total_villages: villages.len(),
            villages_by_district,
        }
    }
}

/// Total area of granted claims, saturating at `Decimal::MAX`.
///
/// The store bounds each area, but a hand-edited snapshot can hold anything.
fn granted_area(claims: &[FraClaim]) -> Decimal {
    claims
        .iter()
        .filter(|c| c.status == ClaimStatus::Granted)
        .try_fold(Decimal::ZERO, |total, c| total.checked_add(c.total_area))
        .unwrap_or_else(|| {
            warn!("Granted area overflows, reporting the maximum");
            Decimal::MAX
        })
}
