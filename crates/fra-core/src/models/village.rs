//! Village master records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A village with its demographic and development indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Village {
    pub id: Uuid,
    pub name: String,
    pub district: String,
    pub tehsil: Option<String>,
    pub population: Option<u32>,
    pub tribal_population: Option<u32>,
    /// Water availability on a 0-10 scale.
    pub water_index: Option<Decimal>,
    /// Development score on a 0-10 scale.
    pub development_index: Option<Decimal>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    /// GeoJSON polygon, stored verbatim.
    pub boundaries: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for [`Village`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVillage {
    pub name: String,
    pub district: String,
    #[serde(default)]
    pub tehsil: Option<String>,
    #[serde(default)]
    pub population: Option<u32>,
    #[serde(default)]
    pub tribal_population: Option<u32>,
    #[serde(default)]
    pub water_index: Option<Decimal>,
    #[serde(default)]
    pub development_index: Option<Decimal>,
    #[serde(default)]
    pub latitude: Option<Decimal>,
    #[serde(default)]
    pub longitude: Option<Decimal>,
    #[serde(default)]
    pub boundaries: Option<String>,
}

impl NewVillage {
    pub fn into_village(self, id: Uuid, created_at: DateTime<Utc>) -> Village {
        Village {
            id,
            name: self.name,
            district: self.district,
            tehsil: self.tehsil,
            population: self.population,
            tribal_population: self.tribal_population,
            water_index: self.water_index,
            development_index: self.development_index,
            latitude: self.latitude,
            longitude: self.longitude,
            boundaries: self.boundaries,
            created_at,
        }
    }
}

impl Village {
    /// Share of the population that is tribal, when both counts are known.
    pub fn tribal_share(&self) -> Option<f64> {
        match (self.population, self.tribal_population) {
            (Some(total), Some(tribal)) if total > 0 => Some(tribal as f64 / total as f64),
            _ => None,
        }
    }
}
