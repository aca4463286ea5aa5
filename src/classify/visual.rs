//! Visual-cue heading classification for color-driven documents.
//!
//! Graphically designed documents mark headings with background fills and
//! weight rather than a typographic size ladder, so this path selects
//! candidates on visual cues and uses only a shallow size ranking.

use std::collections::HashSet;

use super::observer::{ClassifyEvent, ClassifyObserver};
use super::options::ClassifyOptions;
use super::sort_reading_order;
use super::title::detect_title_line;
use crate::model::{DocumentOutline, Heading, HeadingLevel, LineSummary};

/// Classifier for visually-driven documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualClassifier;

impl VisualClassifier {
    /// Create the classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify line summaries into a document outline.
    pub fn classify(
        &self,
        summaries: &[LineSummary],
        options: &ClassifyOptions,
        observer: &dyn ClassifyObserver,
    ) -> DocumentOutline {
        if summaries.is_empty() {
            return DocumentOutline::untitled();
        }

        let title = detect_title_line(summaries);
        observer.on_event(&ClassifyEvent::TitleFound {
            title: title.clone(),
        });

        let candidates: Vec<&LineSummary> = summaries
            .iter()
            .filter(|line| {
                line.text != title
                    && line.font_size >= options.min_visual_heading_size
                    && (line.background_color.is_some() || line.is_bold)
            })
            .collect();
        observer.on_event(&ClassifyEvent::CandidatesSelected {
            count: candidates.len(),
        });

        if candidates.is_empty() {
            return DocumentOutline::new(title, Vec::new());
        }

        let mut headings = assign_visual_levels(&candidates, options);
        sort_reading_order(&mut headings, summaries);

        DocumentOutline::new(title, headings)
    }
}

/// Assign levels from the candidate size ranking and the override table.
///
/// The two largest size tiers both map to H1; smaller sizes carry no
/// size-derived level. Exact-text overrides are applied afterwards and may
/// force a level where the size ranking yielded none. Duplicate texts keep
/// their first occurrence only.
fn assign_visual_levels(candidates: &[&LineSummary], options: &ClassifyOptions) -> Vec<Heading> {
    let mut sizes: Vec<u32> = candidates.iter().map(|line| line.font_size).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.dedup();
    let h1_size = sizes.first().copied().unwrap_or(0);
    let h2_size = sizes.get(1).copied().unwrap_or(h1_size);

    let mut headings = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for line in candidates {
        let mut level = if line.font_size >= h1_size {
            Some(HeadingLevel::H1)
        } else if line.font_size >= h2_size {
            Some(HeadingLevel::H1)
        } else {
            None
        };
        if let Some(forced) = options.level_overrides.get(&line.text) {
            level = Some(*forced);
        }

        let level = match level {
            Some(level) => level,
            None => continue,
        };
        if seen.insert(line.text.as_str()) {
            headings.push(Heading::new(line.text.clone(), level, line.page));
        }
    }
    headings
}

#[cfg(test)]
mod tests {
    use super::super::observer::NullObserver;
    use super::*;

    fn line(
        text: &str,
        size: u32,
        bold: bool,
        background: Option<u32>,
        page: u32,
        y0: f32,
    ) -> LineSummary {
        LineSummary {
            text: text.to_string(),
            font_size: size,
            font_name: "Futura".to_string(),
            is_bold: bold,
            background_color: background,
            page,
            y0,
            word_count: text.split_whitespace().count(),
        }
    }

    #[test]
    fn test_title_is_excluded_from_candidates() {
        let summaries = vec![
            line("Brochure", 28, true, None, 1, 80.0),
            line("Section", 18, false, Some(0xFFD700), 1, 200.0),
        ];
        let outline =
            VisualClassifier::new().classify(&summaries, &ClassifyOptions::default(), &NullObserver);
        assert_eq!(outline.title, "Brochure");
        assert_eq!(outline.headings.len(), 1);
        assert_eq!(outline.headings[0].text, "Section");
    }

    #[test]
    fn test_small_lines_are_not_candidates() {
        let summaries = vec![
            line("Brochure", 28, true, None, 1, 80.0),
            line("tiny but gold", 12, false, Some(0xFFD700), 1, 200.0),
        ];
        let outline =
            VisualClassifier::new().classify(&summaries, &ClassifyOptions::default(), &NullObserver);
        assert!(outline.headings.is_empty());
    }

    #[test]
    fn test_background_or_bold_qualifies() {
        let summaries = vec![
            line("Brochure", 28, true, None, 1, 80.0),
            line("Filled", 18, false, Some(0x4169E1), 1, 200.0),
            line("Heavy", 18, true, None, 1, 300.0),
            line("Plain", 18, false, None, 1, 400.0),
        ];
        let outline =
            VisualClassifier::new().classify(&summaries, &ClassifyOptions::default(), &NullObserver);
        let texts: Vec<_> = outline.headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, ["Filled", "Heavy"]);
    }

    #[test]
    fn test_top_two_size_tiers_collapse_to_h1() {
        let summaries = vec![
            line("Brochure", 28, true, None, 1, 80.0),
            line("Tier one", 20, true, None, 2, 100.0),
            line("Tier two", 18, true, None, 2, 200.0),
            line("Tier three", 15, true, None, 2, 300.0),
        ];
        let outline =
            VisualClassifier::new().classify(&summaries, &ClassifyOptions::default(), &NullObserver);
        let levels: Vec<_> = outline
            .headings
            .iter()
            .map(|h| (h.text.as_str(), h.level))
            .collect();
        // The third tier gets no size-derived level at all
        assert_eq!(
            levels,
            [("Tier one", HeadingLevel::H1), ("Tier two", HeadingLevel::H1)]
        );
    }

    #[test]
    fn test_overrides_force_levels() {
        let options = ClassifyOptions::default()
            .with_level_override("REGULAR PATHWAY", HeadingLevel::H2);
        let summaries = vec![
            line("Brochure", 28, true, None, 1, 80.0),
            line("PATHWAYS", 20, true, None, 2, 100.0),
            line("DISTINCTION PATHWAY", 18, true, None, 2, 200.0),
            line("REGULAR PATHWAY", 15, true, None, 2, 300.0),
        ];
        let outline = VisualClassifier::new().classify(&summaries, &options, &NullObserver);
        let levels: Vec<_> = outline
            .headings
            .iter()
            .map(|h| (h.text.as_str(), h.level))
            .collect();
        // The override rescues a size below the two ranked tiers
        assert_eq!(
            levels,
            [
                ("PATHWAYS", HeadingLevel::H1),
                ("DISTINCTION PATHWAY", HeadingLevel::H1),
                ("REGULAR PATHWAY", HeadingLevel::H2)
            ]
        );
    }

    #[test]
    fn test_duplicate_texts_keep_first_occurrence() {
        let summaries = vec![
            line("Brochure", 28, true, None, 1, 80.0),
            line("Repeated", 18, true, None, 2, 100.0),
            line("Repeated", 18, true, None, 3, 100.0),
        ];
        let outline =
            VisualClassifier::new().classify(&summaries, &ClassifyOptions::default(), &NullObserver);
        assert_eq!(outline.headings.len(), 1);
        assert_eq!(outline.headings[0].page, 2);
    }

    #[test]
    fn test_empty_input() {
        let outline =
            VisualClassifier::new().classify(&[], &ClassifyOptions::default(), &NullObserver);
        assert_eq!(outline, DocumentOutline::untitled());
    }
}
