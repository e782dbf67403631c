//! WASM bindings for forest-rights patta field extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! OCR runs on the JavaScript side; these functions take the recognized text.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use fra_core::digitize::{self, DigitizeResponse};
use fra_core::extract::{ClaimExtractor as _, LinePairExtractor};
use fra_core::extract::rules::parse_issue_date;
use fra_core::models::{ExtractedClaim, ExtractionConfig};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract a claim record from recognized patta text.
///
/// Always succeeds for valid text; fields that were not found are empty strings.
#[wasm_bindgen]
pub fn extract_claim_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&fra_core::extract(text))
}

/// Extract and classify: the same response shape the upload endpoint returns.
#[wasm_bindgen]
pub fn digitize(text: &str) -> Result<JsValue, JsValue> {
    to_js(&digitize::digitize_text(text, &ExtractionConfig::default()))
}

/// Check an upload's media type and size before running OCR on it.
#[wasm_bindgen]
pub fn validate_upload(mime_type: &str, size: f64) -> Result<(), JsValue> {
    digitize::validate_upload(mime_type, size as u64, &ExtractionConfig::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check the upload, then digitize the text recognized in it.
#[wasm_bindgen]
pub fn digitize_upload(mime_type: &str, size: f64, text: &str) -> Result<JsValue, JsValue> {
    let response =
        digitize::digitize_upload(mime_type, size as u64, text, &ExtractionConfig::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&response)
}

/// Whether the text names a patta holder, village or district.
#[wasm_bindgen]
pub fn has_identity(text: &str) -> bool {
    fra_core::extract(text).has_identity()
}

/// Normalize an extracted issue date to `YYYY-MM-DD`.
#[wasm_bindgen]
pub fn normalize_issue_date(date: &str) -> Option<String> {
    parse_issue_date(date).map(|d| d.to_string())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HitJs {
    rule: &'static str,
    field: &'static str,
    value: String,
    line: usize,
    source: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TraceJs {
    claim: ExtractedClaim,
    hits: Vec<HitJs>,
    line_count: usize,
    missing_fields: Vec<&'static str>,
}

/// Claim extractor class for browser use.
#[wasm_bindgen]
pub struct ClaimExtractor {
    extractor: LinePairExtractor,
    config: ExtractionConfig,
}

#[wasm_bindgen]
impl ClaimExtractor {
    /// Create a new claim extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            extractor: LinePairExtractor::new(),
            config: ExtractionConfig::default(),
        }
    }

    /// Set the label written into `documentType`.
    #[wasm_bindgen]
    pub fn set_document_type(&mut self, document_type: &str) {
        self.config.document_type = document_type.to_string();
        self.extractor = LinePairExtractor::new().with_document_type(document_type);
    }

    /// Characters of raw text returned by `digitize` when no identity is found.
    #[wasm_bindgen]
    pub fn set_raw_text_preview_chars(&mut self, chars: usize) {
        self.config.raw_text_preview_chars = chars;
    }

    /// Extract a claim from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.extractor.extract(text))
    }

    /// Extract a claim and report which rule matched on which line.
    #[wasm_bindgen]
    pub fn extract_with_trace(&self, text: &str) -> Result<JsValue, JsValue> {
        let trace = self.extractor.extract_with_trace(text);

        let output = TraceJs {
            missing_fields: trace.claim.missing_fields(),
            hits: trace
                .hits
                .into_iter()
                .map(|hit| HitJs {
                    rule: hit.rule,
                    field: hit.field.key(),
                    value: hit.value.as_text().to_string(),
                    line: hit.line_index,
                    source: hit.source,
                })
                .collect(),
            line_count: trace.line_count,
            claim: trace.claim,
        };

        to_js(&output)
    }

    /// Extract and classify the outcome.
    #[wasm_bindgen]
    pub fn digitize(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.digitize_response(text))
    }

    fn digitize_response(&self, text: &str) -> DigitizeResponse {
        digitize::digitize_with(&self.extractor, text, &self.config)
    }
}

impl Default for ClaimExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Recognized text assembled line by line from browser-side OCR.
#[wasm_bindgen]
pub struct OcrResultJs {
    lines: Vec<String>,
    text: String,
}

#[wasm_bindgen]
impl OcrResultJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            text: String::new(),
        }
    }

    /// Append one recognized line, in reading order.
    #[wasm_bindgen]
    pub fn add_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    /// Set the full text.
    #[wasm_bindgen]
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Get the full text.
    #[wasm_bindgen]
    pub fn get_text(&self) -> String {
        if self.text.is_empty() {
            self.lines.join("\n")
        } else {
            self.text.clone()
        }
    }

    /// Extract a claim from this OCR result.
    #[wasm_bindgen]
    pub fn extract_claim(&self) -> Result<JsValue, JsValue> {
        extract_claim_from_text(&self.get_text())
    }

    /// Digitize this OCR result.
    #[wasm_bindgen]
    pub fn digitize(&self) -> Result<JsValue, JsValue> {
        digitize(&self.get_text())
    }
}

impl Default for OcrResultJs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_has_identity() {
        assert!(has_identity("Village\nKasa"));
        assert!(!has_identity("Tribe\nGond"));
        assert!(!has_identity(""));
    }

    #[wasm_bindgen_test]
    fn test_normalize_issue_date() {
        assert_eq!(normalize_issue_date("15/08/2023").as_deref(), Some("2023-08-15"));
        assert_eq!(normalize_issue_date("not a date"), None);
    }

    #[wasm_bindgen_test]
    fn test_validate_upload() {
        assert!(validate_upload("image/png", 2048.0).is_ok());
        assert!(validate_upload("text/plain", 2048.0).is_err());
        assert!(validate_upload("image/png", 0.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_document_type_flows_into_digitize() {
        let mut extractor = ClaimExtractor::new();
        extractor.set_document_type("Community Forest Rights");

        let response = extractor.digitize_response("Patta Holder\nSita Bai");
        assert!(response.success);
        let claim = response.extracted_data.unwrap();
        assert_eq!(claim.document_type, "Community Forest Rights");
        assert_eq!(claim.pattal_holder_name, "Sita Bai");
    }

    #[wasm_bindgen_test]
    fn test_ocr_result_joins_lines() {
        let mut result = OcrResultJs::new();
        result.add_line("District");
        result.add_line("Gondia");
        assert_eq!(result.get_text(), "District\nGondia");

        result.set_text("Village\nKasa");
        assert_eq!(result.get_text(), "Village\nKasa");
    }
}
