//! Mapped community assets (ponds, farms, forest patches, settlements).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

/// Kind of mapped asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Pond,
    Farm,
    Forest,
    Settlement,
}

impl AssetType {
    pub const ALL: [AssetType; 4] = [
        AssetType::Pond,
        AssetType::Farm,
        AssetType::Forest,
        AssetType::Settlement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Pond => "pond",
            AssetType::Farm => "farm",
            AssetType::Forest => "forest",
            AssetType::Settlement => "settlement",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| StoreError::invalid_value("asset type", s))
    }
}

/// A mapped asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub village: String,
    pub district: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for [`Asset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub village: String,
    pub district: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewAsset {
    pub fn into_asset(self, id: Uuid, created_at: DateTime<Utc>) -> Asset {
        Asset {
            id,
            name: self.name,
            asset_type: self.asset_type,
            village: self.village,
            district: self.district,
            latitude: self.latitude,
            longitude: self.longitude,
            description: self.description,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_type_parsing() {
        assert_eq!("Pond".parse::<AssetType>(), Ok(AssetType::Pond));
        assert_eq!("settlement".parse::<AssetType>(), Ok(AssetType::Settlement));
        assert!("well".parse::<AssetType>().is_err());
    }

    #[test]
    fn test_new_asset_uses_type_key() {
        let json = r#"{
            "name": "Village Pond",
            "type": "pond",
            "village": "Gondia",
            "district": "Gondia",
            "latitude": "21.1558",
            "longitude": "79.0882"
        }"#;
        let asset: NewAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.asset_type, AssetType::Pond);
        assert_eq!(asset.description, None);
    }
}
