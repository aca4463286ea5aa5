//! File-level pipeline: fragment dumps in, outline JSON out.
//!
//! A fragment dump is the neutral interchange surface with any extractor: a
//! JSON array of styled fragments. This module loads dumps, runs inference,
//! and renders the wire format, so callers (and the CLI) get a one-call
//! path from file to outline.

use std::fs;
use std::path::Path;

use crate::classify::{ClassifyOptions, OutlineEngine};
use crate::error::{Error, Result};
use crate::model::{DocumentOutline, StyledFragment};
use crate::render::{to_json, JsonFormat};

/// Error handling mode for fragment-dump loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on the first invalid fragment
    #[default]
    Strict,
    /// Skip invalid fragments and continue
    Lenient,
}

/// Options for the file pipeline.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Inference options
    pub classify: ClassifyOptions,
    /// Loader error handling
    pub error_mode: ErrorMode,
    /// Output JSON format
    pub format: JsonFormat,
}

impl ConvertOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inference options.
    pub fn with_classify(mut self, classify: ClassifyOptions) -> Self {
        self.classify = classify;
        self
    }

    /// Enable lenient loading (skip invalid fragments).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }
}

/// Load fragments from a JSON dump (a serialized array of fragments).
///
/// In strict mode the first fragment violating the extractor contract is an
/// error; in lenient mode it is skipped with a warning.
pub fn load_fragments(bytes: &[u8], mode: ErrorMode) -> Result<Vec<StyledFragment>> {
    let fragments: Vec<StyledFragment> = serde_json::from_slice(bytes)?;

    let mut valid = Vec::with_capacity(fragments.len());
    for (index, fragment) in fragments.into_iter().enumerate() {
        match fragment.validate() {
            Ok(()) => valid.push(fragment),
            Err(reason) => match mode {
                ErrorMode::Strict => {
                    return Err(Error::InvalidFragment(format!(
                        "fragment {}: {}",
                        index, reason
                    )))
                }
                ErrorMode::Lenient => {
                    log::warn!("skipping fragment {}: {}", index, reason);
                }
            },
        }
    }
    Ok(valid)
}

/// Infer an outline from raw dump bytes.
pub fn outline_bytes(bytes: &[u8], options: &ConvertOptions) -> Result<DocumentOutline> {
    let fragments = load_fragments(bytes, options.error_mode)?;
    Ok(OutlineEngine::new(options.classify.clone()).infer(&fragments))
}

/// Infer an outline from a dump file.
pub fn outline_path<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<DocumentOutline> {
    let bytes = fs::read(path)?;
    outline_bytes(&bytes, options)
}

/// Run the full pipeline over raw dump bytes, returning outline JSON.
pub fn convert_bytes(bytes: &[u8], options: &ConvertOptions) -> Result<String> {
    let outline = outline_bytes(bytes, options)?;
    to_json(&outline, options.format)
}

/// Run the full pipeline over a dump file, returning outline JSON.
pub fn convert_path<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<String> {
    let bytes = fs::read(path)?;
    convert_bytes(&bytes, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(fragments: &[serde_json::Value]) -> Vec<u8> {
        serde_json::to_vec(&fragments).unwrap()
    }

    fn valid_fragment(text: &str, size: u32, page: u32) -> serde_json::Value {
        serde_json::json!({
            "text": text,
            "font_size": size,
            "font_name": "Arial",
            "is_bold": false,
            "color": 0,
            "page": page,
            "x0": 72.0, "y0": 100.0, "x1": 200.0, "y1": 112.0
        })
    }

    #[test]
    fn test_load_valid_dump() {
        let bytes = dump(&[valid_fragment("Hello", 12, 1)]);
        let fragments = load_fragments(&bytes, ErrorMode::Strict).unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].text, "Hello");
    }

    #[test]
    fn test_strict_mode_rejects_invalid_fragment() {
        let bytes = dump(&[valid_fragment("ok", 12, 1), valid_fragment("bad", 0, 1)]);
        let err = load_fragments(&bytes, ErrorMode::Strict).unwrap_err();
        assert!(matches!(err, Error::InvalidFragment(_)));
    }

    #[test]
    fn test_lenient_mode_skips_invalid_fragment() {
        let bytes = dump(&[valid_fragment("ok", 12, 1), valid_fragment("bad", 0, 1)]);
        let fragments = load_fragments(&bytes, ErrorMode::Lenient).unwrap();
        assert_eq!(fragments.len(), 1);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = load_fragments(b"not json", ErrorMode::Lenient).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_convert_bytes_round_trip() {
        let bytes = dump(&[valid_fragment("Solo line", 12, 1)]);
        let json = convert_bytes(&bytes, &ConvertOptions::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Solo line");
        assert_eq!(value["outline"], serde_json::json!([]));
    }

    #[test]
    fn test_empty_dump_degenerates() {
        let json = convert_bytes(b"[]", &ConvertOptions::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Untitled Document");
    }
}
