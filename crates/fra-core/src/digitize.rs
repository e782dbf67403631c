//! Digitization envelope: extraction plus the caller-facing outcome.
//!
//! Wraps the pure extractor with the checks and reporting a document
//! upload goes through: accepted media types and size, then the
//! insufficient-evidence classification.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::DigitizeError;
use crate::extract::{ClaimExtractor, LinePairExtractor};
use crate::models::{ExtractedClaim, ExtractionConfig};

pub const SUCCESS_MESSAGE: &str = "Document processed successfully using OCR";
pub const SUCCESS_CONFIDENCE: &str = "Real OCR extraction completed";
pub const INSUFFICIENT_MESSAGE: &str = "Could not extract FRA document data. Please ensure the image is clear and contains FRA document text.";

/// Response reported for one digitized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitizeResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_data: Option<ExtractedClaim>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    /// Prefix of the recognized text, present when extraction found no identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

impl DigitizeResponse {
    /// Whether the record needs manual transcription.
    pub fn needs_manual_entry(&self) -> bool {
        !self.success
    }
}

/// Check an upload before it is handed to the OCR engine.
pub fn validate_upload(
    mime_type: &str,
    size: u64,
    config: &ExtractionConfig,
) -> Result<(), DigitizeError> {
    if size == 0 {
        return Err(DigitizeError::NoFile);
    }

    let mime = mime_type.trim().to_ascii_lowercase();
    if !(mime.starts_with("image/") || mime == "application/pdf") {
        return Err(DigitizeError::UnsupportedType(mime_type.to_string()));
    }

    if size > config.max_upload_bytes {
        return Err(DigitizeError::TooLarge {
            size,
            limit: config.max_upload_bytes,
        });
    }

    Ok(())
}

/// Extract a claim from recognized text and classify the outcome.
pub fn digitize_text(text: &str, config: &ExtractionConfig) -> DigitizeResponse {
    let extractor = LinePairExtractor::new().with_document_type(config.document_type.as_str());
    digitize_with(&extractor, text, config)
}

/// Check an upload, then extract from the text the OCR engine recognized in it.
pub fn digitize_upload(
    mime_type: &str,
    size: u64,
    text: &str,
    config: &ExtractionConfig,
) -> crate::Result<DigitizeResponse> {
    validate_upload(mime_type, size, config)?;
    Ok(digitize_text(text, config))
}

/// [`digitize_text`] with a caller-supplied extractor.
pub fn digitize_with<E: ClaimExtractor>(
    extractor: &E,
    text: &str,
    config: &ExtractionConfig,
) -> DigitizeResponse {
    info!("Extracting claim from {} characters of text", text.len());

    let claim = extractor.extract(text);

    if !claim.has_identity() {
        warn!("No patta holder, village or district found; returning raw text for manual entry");
        return DigitizeResponse {
            success: false,
            message: INSUFFICIENT_MESSAGE.to_string(),
            extracted_data: None,
            confidence: None,
            raw_text: Some(preview(text, config.raw_text_preview_chars)),
        };
    }

    debug!(
        "Extracted claim for {:?} in {:?}, {} fields missing",
        claim.pattal_holder_name,
        claim.village,
        claim.missing_fields().len()
    );

    DigitizeResponse {
        success: true,
        message: SUCCESS_MESSAGE.to_string(),
        extracted_data: Some(claim),
        confidence: Some(SUCCESS_CONFIDENCE.to_string()),
        raw_text: None,
    }
}

/// First `max_chars` characters of `text`.
fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FraError;

    #[test]
    fn test_upload_checked_before_extraction() {
        let config = ExtractionConfig::default();

        let err = digitize_upload("text/plain", 100, "Village\nKasa", &config).unwrap_err();
        assert!(matches!(
            err,
            FraError::Digitize(DigitizeError::UnsupportedType(_))
        ));

        let response = digitize_upload("application/pdf", 100, "Village\nKasa", &config).unwrap();
        assert!(response.success);
    }

    #[test]
    fn test_insufficient_evidence_returns_raw_text() {
        let config = ExtractionConfig::default();
        let text = "Tribe\nGond\nTotal Area 2 hectare";

        let response = digitize_text(text, &config);

        assert!(!response.success);
        assert!(response.needs_manual_entry());
        assert_eq!(response.message, INSUFFICIENT_MESSAGE);
        assert_eq!(response.extracted_data, None);
        assert_eq!(response.raw_text.as_deref(), Some(text));
    }

    #[test]
    fn test_empty_text_is_insufficient() {
        let response = digitize_text("", &ExtractionConfig::default());
        assert!(!response.success);
        assert_eq!(response.raw_text.as_deref(), Some(""));
    }

    #[test]
    fn test_raw_text_is_truncated_by_chars() {
        let config = ExtractionConfig {
            raw_text_preview_chars: 4,
            ..Default::default()
        };
        let response = digitize_text("वन अधिकार पत्र", &config);
        assert_eq!(response.raw_text.as_deref(), Some("वन अ"));
    }

    #[test]
    fn test_success_envelope() {
        let config = ExtractionConfig::default();
        let response = digitize_text("District\nGondia", &config);

        assert!(response.success);
        assert_eq!(response.message, SUCCESS_MESSAGE);
        assert_eq!(response.raw_text, None);
        assert_eq!(response.extracted_data.unwrap().district, "Gondia");
    }

    #[test]
    fn test_envelope_json_shape() {
        let response = digitize_text("Village\nKasa", &ExtractionConfig::default());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["extractedData"]["village"], "Kasa");
        assert_eq!(json["extractedData"]["status"], "pending");
        assert!(json.get("rawText").is_none());

        let response = digitize_text("nothing useful", &ExtractionConfig::default());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("extractedData").is_none());
        assert_eq!(json["rawText"], "nothing useful");
    }

    #[test]
    fn test_validate_upload() {
        let config = ExtractionConfig::default();

        assert_eq!(validate_upload("image/png", 2048, &config), Ok(()));
        assert_eq!(validate_upload("application/pdf", 2048, &config), Ok(()));
        assert_eq!(validate_upload("image/png", 0, &config), Err(DigitizeError::NoFile));
        assert_eq!(
            validate_upload("text/plain", 10, &config),
            Err(DigitizeError::UnsupportedType("text/plain".to_string()))
        );
        assert_eq!(
            validate_upload("image/jpeg", 10 * 1024 * 1024 + 1, &config),
            Err(DigitizeError::TooLarge {
                size: 10 * 1024 * 1024 + 1,
                limit: 10 * 1024 * 1024,
            })
        );
    }
}
