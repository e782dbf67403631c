//! Data models for land records and configuration.

pub mod asset;
pub mod claim;
pub mod config;
pub mod recommendation;
pub mod village;

pub use asset::{Asset, AssetType, NewAsset};
pub use claim::{ClaimStatus, ExtractedClaim, FraClaim, LandType, NewFraClaim};
pub use config::{ExtractionConfig, FraConfig, StoreConfig};
pub use recommendation::{NewRecommendation, Priority, Recommendation, SchemeType};
pub use village::{NewVillage, Village};
