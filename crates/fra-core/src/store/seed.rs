//! Demo records for a fresh store: two villages of Gondia district.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use crate::models::{
    AssetType, ClaimStatus, LandType, NewAsset, NewFraClaim, NewRecommendation, NewVillage,
    Priority, SchemeType,
};

use super::{Result, Storage};

const GONDIA_BOUNDARY: &str = r#"{"type":"Polygon","coordinates":[[[79.0782,21.1558],[79.0982,21.1558],[79.0982,21.1358],[79.0782,21.1358],[79.0782,21.1558]]]}"#;
const ARJUNI_BOUNDARY: &str = r#"{"type":"Polygon","coordinates":[[[79.1082,21.1458],[79.1282,21.1458],[79.1282,21.1258],[79.1082,21.1258],[79.1082,21.1458]]]}"#;

/// Degrees with four decimal places, e.g. `deg(211558)` is 21.1558.
fn deg(scaled: i64) -> Decimal {
    Decimal::new(scaled, 4)
}

pub fn demo_villages() -> Vec<NewVillage> {
    vec![
        NewVillage {
            name: "Gondia".to_string(),
            district: "Gondia".to_string(),
            tehsil: Some("Arjuni".to_string()),
            population: Some(15_420),
            tribal_population: Some(12_000),
            water_index: Some(Decimal::new(65, 1)),
            development_index: Some(Decimal::new(72, 1)),
            latitude: Some(deg(211558)),
            longitude: Some(deg(790882)),
            boundaries: Some(GONDIA_BOUNDARY.to_string()),
        },
        NewVillage {
            name: "Arjuni".to_string(),
            district: "Gondia".to_string(),
            tehsil: Some("Arjuni".to_string()),
            population: Some(12_340),
            tribal_population: Some(9_800),
            water_index: Some(Decimal::new(58, 1)),
            development_index: Some(Decimal::new(68, 1)),
            latitude: Some(deg(211458)),
            longitude: Some(deg(791082)),
            boundaries: Some(ARJUNI_BOUNDARY.to_string()),
        },
    ]
}

pub fn demo_claims() -> Vec<NewFraClaim> {
    vec![
        NewFraClaim {
            pattal_holder_name: "Ramesh Kumar Bhuriya".to_string(),
            father_name: Some("Govind Bhuriya".to_string()),
            village: "Gondia".to_string(),
            district: "Gondia".to_string(),
            tehsil: Some("Arjuni".to_string()),
            tribe: Some("Gond".to_string()),
            total_area: Decimal::new(250, 2),
            survey_number: Some("124/3A".to_string()),
            land_type: Some(LandType::AgriculturalForest),
            status: ClaimStatus::Granted,
            issue_date: NaiveDate::from_ymd_opt(2023, 8, 15),
            document_type: Some("Forest Rights Patta".to_string()),
            latitude: Some(deg(211508)),
            longitude: Some(deg(790882)),
        },
        NewFraClaim {
            pattal_holder_name: "Priya Tekam".to_string(),
            father_name: Some("Suresh Tekam".to_string()),
            village: "Arjuni".to_string(),
            district: "Gondia".to_string(),
            tehsil: Some("Arjuni".to_string()),
            tribe: Some("Gond".to_string()),
            total_area: Decimal::new(180, 2),
            survey_number: Some("87/2B".to_string()),
            land_type: Some(LandType::Agricultural),
            status: ClaimStatus::Pending,
            issue_date: None,
            document_type: Some("Forest Rights Patta".to_string()),
            latitude: Some(deg(211408)),
            longitude: Some(deg(790982)),
        },
    ]
}

pub fn demo_assets() -> Vec<NewAsset> {
    vec![
        NewAsset {
            name: "Village Pond 1".to_string(),
            asset_type: AssetType::Pond,
            village: "Gondia".to_string(),
            district: "Gondia".to_string(),
            latitude: deg(211458),
            longitude: deg(790832),
            description: Some("Primary water source for irrigation".to_string()),
        },
        NewAsset {
            name: "Cooperative Farm".to_string(),
            asset_type: AssetType::Farm,
            village: "Arjuni".to_string(),
            district: "Gondia".to_string(),
            latitude: deg(211358),
            longitude: deg(790932),
            description: Some("Community agricultural land".to_string()),
        },
    ]
}

pub fn demo_recommendations() -> Vec<NewRecommendation> {
    vec![
        NewRecommendation {
            scheme_name: "Jal Jeevan Mission".to_string(),
            scheme_type: SchemeType::JalJeevan,
            priority: Priority::High,
            village: "Gondia".to_string(),
            district: "Gondia".to_string(),
            description: "Low water index detected. Immediate water infrastructure development recommended.".to_string(),
            eligible_beneficiaries: Some(856),
            estimated_budget: Some(Decimal::new(12_500_000, 2)),
            is_active: true,
        },
        NewRecommendation {
            scheme_name: "PM-Kisan Scheme".to_string(),
            scheme_type: SchemeType::PmKisan,
            priority: Priority::Medium,
            village: "Arjuni".to_string(),
            district: "Gondia".to_string(),
            description: "Agricultural land identified without active scheme enrollment.".to_string(),
            eligible_beneficiaries: Some(234),
            estimated_budget: Some(Decimal::new(46_800_000, 2)),
            is_active: true,
        },
    ]
}

/// Insert the demo records into `store`.
pub fn seed_demo_data<S: Storage + ?Sized>(store: &S) -> Result<()> {
    for village in demo_villages() {
        store.create_village(village)?;
    }
    for claim in demo_claims() {
        store.create_claim(claim)?;
    }
    for asset in demo_assets() {
        store.create_asset(asset)?;
    }
    for recommendation in demo_recommendations() {
        store.create_recommendation(recommendation)?;
    }

    info!("Seeded demo records");
    Ok(())
}
