//! Assembled lines and their per-line summaries.

use super::StyledFragment;

/// Fragments sharing a page and a vertical band, in left-to-right order.
///
/// Lines are derived during classification and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Page the line belongs to (a line never spans two pages)
    pub page: u32,
    /// Member fragments, sorted by x0
    pub fragments: Vec<StyledFragment>,
}

impl Line {
    /// Condense the line into the digest the classifiers work with.
    pub fn summarize(&self) -> LineSummary {
        let first = match self.fragments.first() {
            Some(first) => first,
            None => return LineSummary::default(),
        };

        let text = self
            .fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();
        let word_count = text.split_whitespace().count();

        LineSummary {
            text,
            font_size: first.font_size,
            font_name: first.font_name.clone(),
            is_bold: self.fragments.iter().all(|f| f.is_bold),
            background_color: self.fragments.iter().find_map(|f| f.background_color),
            page: self.page,
            y0: first.y0,
            word_count,
        }
    }
}

/// Digest of one assembled line.
///
/// Representative style comes from the leftmost fragment; boldness holds only
/// when every fragment is bold; the background color is the first one any
/// fragment reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSummary {
    /// Space-joined, trimmed text of the member fragments
    pub text: String,
    /// Font size of the leftmost fragment
    pub font_size: u32,
    /// Font family of the leftmost fragment
    pub font_name: String,
    /// AND over the member fragments
    pub is_bold: bool,
    /// First non-absent background color among the members
    pub background_color: Option<u32>,
    /// Page number (1-based)
    pub page: u32,
    /// Vertical position of the leftmost fragment
    pub y0: f32,
    /// Whitespace-split token count of `text`
    pub word_count: usize,
}
