//! Government scheme recommendations targeted at villages.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

/// Welfare scheme a recommendation points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeType {
    /// Jal Jeevan Mission (household tap water).
    JalJeevan,
    /// PM-KISAN income support.
    PmKisan,
    /// MGNREGA rural employment.
    Mgnrega,
}

impl SchemeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeType::JalJeevan => "jal_jeevan",
            SchemeType::PmKisan => "pm_kisan",
            SchemeType::Mgnrega => "mgnrega",
        }
    }
}

impl FromStr for SchemeType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jal_jeevan" => Ok(SchemeType::JalJeevan),
            "pm_kisan" => Ok(SchemeType::PmKisan),
            "mgnrega" => Ok(SchemeType::Mgnrega),
            _ => Err(StoreError::invalid_value("scheme type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| StoreError::invalid_value("priority", s))
    }
}

/// A scheme recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: Uuid,
    pub scheme_name: String,
    pub scheme_type: SchemeType,
    pub priority: Priority,
    pub village: String,
    pub district: String,
    pub description: String,
    pub eligible_beneficiaries: Option<u32>,
    pub estimated_budget: Option<Decimal>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for [`Recommendation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    pub scheme_name: String,
    pub scheme_type: SchemeType,
    pub priority: Priority,
    pub village: String,
    pub district: String,
    pub description: String,
    #[serde(default)]
    pub eligible_beneficiaries: Option<u32>,
    #[serde(default)]
    pub estimated_budget: Option<Decimal>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewRecommendation {
    pub fn into_recommendation(self, id: Uuid, created_at: DateTime<Utc>) -> Recommendation {
        Recommendation {
            id,
            scheme_name: self.scheme_name,
            scheme_type: self.scheme_type,
            priority: self.priority,
            village: self.village,
            district: self.district,
            description: self.description,
            eligible_beneficiaries: self.eligible_beneficiaries,
            estimated_budget: self.estimated_budget,
            is_active: self.is_active,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recommendation_defaults_active() {
        let json = r#"{
            "schemeName": "Jal Jeevan Mission",
            "schemeType": "jal_jeevan",
            "priority": "high",
            "village": "Arjuni",
            "district": "Gondia",
            "description": "Tap connections for 120 households"
        }"#;
        let rec: NewRecommendation = serde_json::from_str(json).unwrap();
        assert!(rec.is_active);
        assert_eq!(rec.scheme_type, SchemeType::JalJeevan);
        assert_eq!(rec.priority, Priority::High);
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert!("urgent".parse::<Priority>().is_err());
        assert_eq!("pm_kisan".parse::<SchemeType>(), Ok(SchemeType::PmKisan));
    }
}
