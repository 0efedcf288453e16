//! WASM bindings for hypmap-core.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::ConvertError;
use crate::model::HypothesisMap;
use crate::{convert, ConvertOptions, IdGenerator};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// Error information returned instead of a document.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    /// "parse", "validation" or "serialize"
    pub stage: &'static str,
    pub entity_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct ErrorOutput {
    error: ErrorInfo,
}

impl From<&ConvertError> for ErrorInfo {
    fn from(e: &ConvertError) -> Self {
        ErrorInfo {
            message: e.to_string(),
            stage: e.stage(),
            entity_id: e.entity_id().map(str::to_string),
        }
    }
}

fn run(input: &str, title: Option<String>) -> Result<String, ConvertError> {
    let map = HypothesisMap::from_json(input)?;
    let options = ConvertOptions { title, ..ConvertOptions::default() };
    let mut ids = IdGenerator::from_entropy();
    convert(&map, &options, &mut ids)?.to_json_pretty()
}

/// Convert a hypothesis map (JSON) to an `.excalidraw` file.
/// On failure returns `{"error": {message, stage, entity_id}}`.
#[wasm_bindgen]
pub fn convert_hypothesis_map(input: &str, title: Option<String>) -> String {
    match run(input, title) {
        Ok(json) => json,
        Err(e) => {
            console_error(&format!("Error converting hypothesis map: {e}"));
            let output = ErrorOutput { error: ErrorInfo::from(&e) };
            serde_json::to_string(&output)
                .unwrap_or_else(|_| "{\"error\": {\"message\": \"conversion failed\"}}".to_string())
        }
    }
}
