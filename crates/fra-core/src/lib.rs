//! Core library for forest-rights land records.
//!
//! This crate provides:
//! - Field extraction from OCR text of Forest Rights Act pattas
//! - The digitization envelope reported for an uploaded document
//! - Claim, asset, village and scheme recommendation models
//! - An in-memory record store with JSON snapshots
//! - Dashboard statistics

pub mod digitize;
pub mod error;
pub mod extract;
pub mod models;
pub mod stats;
pub mod store;

pub use digitize::{DigitizeResponse, digitize_text, digitize_upload, validate_upload};
pub use error::{DigitizeError, FraError, Result, StoreError};
pub use extract::{ClaimExtractor, ExtractionTrace, LinePairExtractor, extract};
pub use models::{ClaimStatus, ExtractedClaim, FraClaim, FraConfig, LandType};
pub use stats::DashboardStats;
pub use store::{MemoryStore, Storage};
