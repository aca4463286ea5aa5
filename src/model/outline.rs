//! Outline types: heading levels, headings, and the document outline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Title used when the first page yields no usable text.
pub const UNTITLED_TITLE: &str = "Untitled Document";

/// Semantic depth of a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level section
    H1,
    /// Subsection
    H2,
    /// Sub-subsection
    H3,
}

impl HeadingLevel {
    /// Numeric depth, 1 through 3.
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// Level for a numeric depth, if it is within the supported range.
    pub fn from_depth(depth: u8) -> Option<Self> {
        match depth {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            _ => None,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadingLevel::H1 => write!(f, "H1"),
            HeadingLevel::H2 => write!(f, "H2"),
            HeadingLevel::H3 => write!(f, "H3"),
        }
    }
}

/// A single classified heading.
///
/// `text` is the literal line text as extracted; downstream consumers use it
/// as an exact substring anchor into the document's full text, so it is never
/// re-cased, re-spaced, or truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Hierarchy level
    pub level: HeadingLevel,
    /// Literal line text
    pub text: String,
    /// Page the heading appears on (1-based)
    pub page: u32,
}

impl Heading {
    /// Create a new heading.
    pub fn new(text: impl Into<String>, level: HeadingLevel, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// The inferred structure of one document.
///
/// Headings are ordered by page ascending, then by on-page vertical position
/// ascending. That ordering is a postcondition consumers rely on, not an
/// implementation detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Document title, possibly [`UNTITLED_TITLE`]
    pub title: String,
    /// Headings in reading order
    #[serde(rename = "outline")]
    pub headings: Vec<Heading>,
}

impl DocumentOutline {
    /// Create an outline from a title and headings.
    pub fn new(title: impl Into<String>, headings: Vec<Heading>) -> Self {
        Self {
            title: title.into(),
            headings,
        }
    }

    /// The degenerate outline for empty or unusable input.
    pub fn untitled() -> Self {
        Self::new(UNTITLED_TITLE, Vec::new())
    }

    /// Whether the outline carries no headings.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }
}
