//! Styled text fragments: the input unit of structure inference.

use serde::{Deserialize, Serialize};

/// A positioned, styled snippet of text produced by an upstream extractor.
///
/// Fragments are immutable once produced. The coordinate system has the
/// origin at the top-left of the page with y increasing downward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledFragment {
    /// Text content, non-empty after trimming
    pub text: String,

    /// Font size in points, rounded to an integer
    pub font_size: u32,

    /// Font family name with any subset/foundry prefix stripped
    pub font_name: String,

    /// Whether the fragment is set in a bold face
    pub is_bold: bool,

    /// Foreground color as packed 0xRRGGBB
    pub color: u32,

    /// Background color as packed 0xRRGGBB, if the extractor reported one
    #[serde(default)]
    pub background_color: Option<u32>,

    /// Page number (1-based)
    pub page: u32,

    /// Left edge of the bounding box
    pub x0: f32,

    /// Top edge of the bounding box
    pub y0: f32,

    /// Right edge of the bounding box
    pub x1: f32,

    /// Bottom edge of the bounding box
    pub y1: f32,
}

impl StyledFragment {
    /// Check the invariants an extractor is expected to uphold.
    ///
    /// Returns a human-readable reason on the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("empty text".to_string());
        }
        if self.font_size == 0 {
            return Err("font size must be positive".to_string());
        }
        if self.page == 0 {
            return Err("page numbers are 1-based".to_string());
        }
        if self.x1 < self.x0 || self.y1 < self.y0 {
            return Err(format!(
                "degenerate bounding box ({}, {}, {}, {})",
                self.x0, self.y0, self.x1, self.y1
            ));
        }
        Ok(())
    }
}

/// Strip a font subset tag (`ABCDEF+`) from a raw font name.
///
/// Extractors commonly report embedded subset fonts as e.g. `ABCDEE+Calibri`;
/// the tag is six uppercase ASCII letters followed by `+`.
pub fn strip_subset_prefix(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() > 7
        && bytes[6] == b'+'
        && bytes[..6].iter().all(|b| b.is_ascii_uppercase())
    {
        &raw[7..]
    } else {
        raw
    }
}

/// Whether a font name implies a bold face.
pub fn font_name_implies_bold(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("bold") || lower.contains("black") || lower.contains("heavy")
}
