//! Forest-rights claim records: the extractor's output and the persisted claim.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;
use crate::extract::rules::dates::parse_issue_date;

/// Document label stamped on every extracted record.
pub const DEFAULT_DOCUMENT_TYPE: &str = "Forest Rights Patta";

/// Land classification written on a patta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandType {
    #[serde(rename = "Agricultural")]
    Agricultural,
    #[serde(rename = "Forest")]
    Forest,
    #[serde(rename = "Agricultural + Forest")]
    AgriculturalForest,
}

impl LandType {
    /// Label as printed on the document.
    pub fn label(&self) -> &'static str {
        match self {
            LandType::Agricultural => "Agricultural",
            LandType::Forest => "Forest",
            LandType::AgriculturalForest => "Agricultural + Forest",
        }
    }
}

impl fmt::Display for LandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LandType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "agricultural" => Ok(LandType::Agricultural),
            "forest" => Ok(LandType::Forest),
            "agricultural + forest" | "agricultural_forest" => Ok(LandType::AgriculturalForest),
            _ => Err(StoreError::invalid_value("land type", s)),
        }
    }
}

/// Review state of a claim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Granted,
    #[default]
    Pending,
    Rejected,
    UnderReview,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 4] = [
        ClaimStatus::Granted,
        ClaimStatus::Pending,
        ClaimStatus::Rejected,
        ClaimStatus::UnderReview,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Granted => "granted",
            ClaimStatus::Pending => "pending",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::UnderReview => "under_review",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| StoreError::InvalidStatus(s.to_string()))
    }
}

/// Structured record recovered from the text of a scanned patta.
///
/// Every field is a plain string so a reviewer can correct it before the
/// record is promoted into a [`NewFraClaim`]. Missing evidence leaves a
/// field empty; the record itself is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedClaim {
    pub document_type: String,
    pub issue_date: String,
    pub district: String,
    pub tehsil: String,
    pub pattal_holder_name: String,
    pub father_name: String,
    pub village: String,
    pub tribe: String,
    pub total_area: String,
    pub survey_number: String,
    #[serde(with = "land_type_label")]
    pub land_type: Option<LandType>,
    pub status: ClaimStatus,
}

impl Default for ExtractedClaim {
    fn default() -> Self {
        Self {
            document_type: DEFAULT_DOCUMENT_TYPE.to_string(),
            issue_date: String::new(),
            district: String::new(),
            tehsil: String::new(),
            pattal_holder_name: String::new(),
            father_name: String::new(),
            village: String::new(),
            tribe: String::new(),
            total_area: String::new(),
            survey_number: String::new(),
            land_type: None,
            status: ClaimStatus::Pending,
        }
    }
}

impl ExtractedClaim {
    /// Whether any of the identity fields (holder, village, district) was found.
    ///
    /// A record without identity is "insufficient evidence": callers surface
    /// the raw text for manual transcription instead of the guess.
    pub fn has_identity(&self) -> bool {
        !(self.pattal_holder_name.is_empty() && self.village.is_empty() && self.district.is_empty())
    }

    /// Names of fields left empty by extraction.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let text_fields = [
            ("issueDate", &self.issue_date),
            ("district", &self.district),
            ("tehsil", &self.tehsil),
            ("pattalHolderName", &self.pattal_holder_name),
            ("fatherName", &self.father_name),
            ("village", &self.village),
            ("tribe", &self.tribe),
            ("totalArea", &self.total_area),
            ("surveyNumber", &self.survey_number),
        ];
        for (name, value) in text_fields {
            if value.is_empty() {
                missing.push(name);
            }
        }
        if self.land_type.is_none() {
            missing.push("landType");
        }
        missing
    }

    /// Promote a reviewed record into an insertable claim.
    pub fn to_new_claim(&self) -> Result<NewFraClaim, StoreError> {
        let required = [
            ("pattalHolderName", &self.pattal_holder_name),
            ("village", &self.village),
            ("district", &self.district),
            ("totalArea", &self.total_area),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(StoreError::validation(field, "required"));
            }
        }

        let total_area = Decimal::from_str(self.total_area.trim())
            .map_err(|_| StoreError::invalid_value("totalArea", self.total_area.as_str()))?;

        Ok(NewFraClaim {
            pattal_holder_name: self.pattal_holder_name.trim().to_string(),
            father_name: non_empty(&self.father_name),
            village: self.village.trim().to_string(),
            district: self.district.trim().to_string(),
            tehsil: non_empty(&self.tehsil),
            tribe: non_empty(&self.tribe),
            total_area: total_area.round_dp(2),
            survey_number: non_empty(&self.survey_number),
            land_type: self.land_type,
            status: self.status,
            issue_date: parse_issue_date(&self.issue_date),
            document_type: non_empty(&self.document_type),
            latitude: None,
            longitude: None,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Serializes `Option<LandType>` as its label, or `""` when absent.
mod land_type_label {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::LandType;

    pub fn serialize<S: Serializer>(value: &Option<LandType>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.map(|t| t.label()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<LandType>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

/// A persisted forest-rights claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraClaim {
    pub id: Uuid,
    pub pattal_holder_name: String,
    pub father_name: Option<String>,
    pub village: String,
    pub district: String,
    pub tehsil: Option<String>,
    pub tribe: Option<String>,
    pub total_area: Decimal,
    pub survey_number: Option<String>,
    pub land_type: Option<LandType>,
    pub status: ClaimStatus,
    pub issue_date: Option<NaiveDate>,
    pub document_type: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for [`FraClaim`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFraClaim {
    pub pattal_holder_name: String,
    #[serde(default)]
    pub father_name: Option<String>,
    pub village: String,
    pub district: String,
    #[serde(default)]
    pub tehsil: Option<String>,
    #[serde(default)]
    pub tribe: Option<String>,
    pub total_area: Decimal,
    #[serde(default)]
    pub survey_number: Option<String>,
    #[serde(default)]
    pub land_type: Option<LandType>,
    #[serde(default)]
    pub status: ClaimStatus,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub latitude: Option<Decimal>,
    #[serde(default)]
    pub longitude: Option<Decimal>,
}

impl NewFraClaim {
    pub fn into_claim(self, id: Uuid, created_at: DateTime<Utc>) -> FraClaim {
        FraClaim {
            id,
            pattal_holder_name: self.pattal_holder_name,
            father_name: self.father_name,
            village: self.village,
            district: self.district,
            tehsil: self.tehsil,
            tribe: self.tribe,
            total_area: self.total_area,
            survey_number: self.survey_number,
            land_type: self.land_type,
            status: self.status,
            issue_date: self.issue_date,
            document_type: self.document_type,
            latitude: self.latitude,
            longitude: self.longitude,
            created_at,
        }
    }
}
