//! JSON rendering for document outlines.

use crate::error::{Error, Result};
use crate::model::DocumentOutline;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize an outline to `{"title": …, "outline": [{"level","text","page"}…]}`.
pub fn to_json(outline: &DocumentOutline, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(outline),
        JsonFormat::Compact => serde_json::to_string(outline),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Heading, HeadingLevel};

    fn outline() -> DocumentOutline {
        DocumentOutline::new(
            "Field Guide",
            vec![
                Heading::new("1. Habitats", HeadingLevel::H1, 2),
                Heading::new("1.1 Wetlands", HeadingLevel::H2, 2),
            ],
        )
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&outline(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"outline\""));
        assert!(json.contains("Field Guide"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&outline(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert!(json.contains("\"level\":\"H2\""));
    }

    #[test]
    fn test_empty_outline_still_has_both_keys() {
        let json = to_json(&DocumentOutline::untitled(), JsonFormat::Compact).unwrap();
        assert_eq!(json, "{\"title\":\"Untitled Document\",\"outline\":[]}");
    }
}
