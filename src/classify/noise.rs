//! Suppression of repeated page furniture and table-of-contents lines.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::model::LineSummary;

/// Header band limit in points when no page height is configured.
pub const HEADER_Y_LIMIT: f32 = 120.0;

/// Footer band limit in points when no page height is configured.
pub const FOOTER_Y_LIMIT: f32 = 700.0;

/// Header/footer bands expressed as fractions of the page height.
///
/// Fragment coordinates carry no page geometry, so the fractions only apply
/// when the caller supplies a page height; otherwise the bands resolve to
/// the fixed point values the classifier was calibrated with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseBands {
    /// y0 below `header_fraction * page_height` is header territory
    pub header_fraction: f32,
    /// y0 above `footer_fraction * page_height` is footer territory
    pub footer_fraction: f32,
}

impl Default for NoiseBands {
    fn default() -> Self {
        Self {
            header_fraction: 0.15,
            footer_fraction: 0.88,
        }
    }
}

impl NoiseBands {
    /// Resolve to concrete (header, footer) y limits.
    pub fn resolve(&self, page_height: Option<f32>) -> (f32, f32) {
        match page_height {
            Some(height) if height > 0.0 => (
                self.header_fraction * height,
                self.footer_fraction * height,
            ),
            _ => (HEADER_Y_LIMIT, FOOTER_Y_LIMIT),
        }
    }
}

/// Remove lines whose text repeats within the header or footer band.
///
/// Occurrences are counted per band across the whole document. Any text seen
/// at least twice in one band is removed from every position it occupies,
/// regardless of page or band.
pub fn filter_repeated_bands(
    summaries: Vec<LineSummary>,
    header_limit: f32,
    footer_limit: f32,
) -> Vec<LineSummary> {
    let mut header_counts: HashMap<&str, usize> = HashMap::new();
    let mut footer_counts: HashMap<&str, usize> = HashMap::new();
    for line in &summaries {
        if line.y0 < header_limit {
            *header_counts.entry(line.text.as_str()).or_insert(0) += 1;
        } else if line.y0 > footer_limit {
            *footer_counts.entry(line.text.as_str()).or_insert(0) += 1;
        }
    }

    let repeated: HashSet<String> = header_counts
        .into_iter()
        .chain(footer_counts)
        .filter(|(_, count)| *count >= 2)
        .map(|(text, _)| text.to_string())
        .collect();
    if repeated.is_empty() {
        return summaries;
    }

    summaries
        .into_iter()
        .filter(|line| !repeated.contains(&line.text))
        .collect()
}

/// Detector for table-of-contents entries ("Results ....... 12").
#[derive(Debug)]
pub struct TocDetector {
    entry: Regex,
}

impl TocDetector {
    /// Compile the entry pattern.
    pub fn new() -> Self {
        Self {
            entry: Regex::new(r".+\s*\.{4,}\s*\d+\s*$").unwrap(),
        }
    }

    /// Whether a line reads as a leadered ToC entry ending in a page number.
    pub fn is_toc_entry(&self, text: &str) -> bool {
        self.entry.is_match(text)
    }
}

impl Default for TocDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str, page: u32, y0: f32) -> LineSummary {
        LineSummary {
            text: text.to_string(),
            font_size: 10,
            font_name: "Arial".to_string(),
            is_bold: false,
            background_color: None,
            page,
            y0,
            word_count: text.split_whitespace().count(),
        }
    }

    #[test]
    fn test_repeated_header_removed_everywhere() {
        let summaries = vec![
            line("ACME Corp", 1, 50.0),
            line("Overview", 1, 200.0),
            line("ACME Corp", 2, 50.0),
            // A mid-page copy of the header text is removed too
            line("ACME Corp", 3, 400.0),
        ];
        let clean = filter_repeated_bands(summaries, HEADER_Y_LIMIT, FOOTER_Y_LIMIT);
        let texts: Vec<_> = clean.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["Overview"]);
    }

    #[test]
    fn test_single_occurrence_kept() {
        let summaries = vec![line("Draft", 1, 50.0), line("Body", 1, 300.0)];
        let clean = filter_repeated_bands(summaries, HEADER_Y_LIMIT, FOOTER_Y_LIMIT);
        assert_eq!(clean.len(), 2);
    }

    #[test]
    fn test_bands_counted_independently() {
        // One occurrence in the header band and one in the footer band:
        // neither band reaches two, so the text survives.
        let summaries = vec![
            line("Page marker", 1, 50.0),
            line("Page marker", 2, 750.0),
            line("Body", 1, 300.0),
        ];
        let clean = filter_repeated_bands(summaries, HEADER_Y_LIMIT, FOOTER_Y_LIMIT);
        assert_eq!(clean.len(), 3);
    }

    #[test]
    fn test_repeated_footer_removed() {
        let summaries = vec![
            line("Body", 2, 300.0),
            line("Confidential", 1, 760.0),
            line("Confidential", 2, 760.0),
        ];
        let clean = filter_repeated_bands(summaries, HEADER_Y_LIMIT, FOOTER_Y_LIMIT);
        let texts: Vec<_> = clean.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["Body"]);
    }

    #[test]
    fn test_mid_page_repeats_untouched() {
        let summaries = vec![line("Chorus", 1, 300.0), line("Chorus", 2, 300.0)];
        let clean = filter_repeated_bands(summaries, HEADER_Y_LIMIT, FOOTER_Y_LIMIT);
        assert_eq!(clean.len(), 2);
    }

    #[test]
    fn test_bands_resolve_against_page_height() {
        let bands = NoiseBands::default();
        let (header, footer) = bands.resolve(Some(1000.0));
        assert_eq!(header, 150.0);
        assert_eq!(footer, 880.0);
    }

    #[test]
    fn test_bands_fall_back_to_literal_limits() {
        let bands = NoiseBands::default();
        assert_eq!(bands.resolve(None), (HEADER_Y_LIMIT, FOOTER_Y_LIMIT));
        assert_eq!(bands.resolve(Some(0.0)), (HEADER_Y_LIMIT, FOOTER_Y_LIMIT));
    }

    #[test]
    fn test_toc_entries() {
        let toc = TocDetector::new();
        assert!(toc.is_toc_entry("Results ....... 12"));
        assert!(toc.is_toc_entry("1. Introduction.....3"));
        assert!(toc.is_toc_entry("Appendix A ............ 104  "));
        assert!(!toc.is_toc_entry("Results"));
        assert!(!toc.is_toc_entry("Results ... 12"));
        assert!(!toc.is_toc_entry("Results ....... twelve"));
    }
}
