//! The document structure inference engine.
//!
//! Pipeline: assemble fragments into lines, profile the body style, route
//! on the background palette, then classify with the standard
//! (style-deviation) or visual (color-cue) strategy. The whole pipeline is
//! a pure, synchronous transform: it never fails, holds no state across
//! documents, and is safe to share across threads.

mod assemble;
mod noise;
mod observer;
mod options;
mod profile;
mod standard;
mod title;
mod visual;

pub use assemble::{FirstFitAssembler, LineAssembler, LINE_VERTICAL_TOLERANCE};
pub use noise::{filter_repeated_bands, NoiseBands, TocDetector, FOOTER_Y_LIMIT, HEADER_Y_LIMIT};
pub use observer::{ClassifyEvent, ClassifyObserver, LogObserver, NullObserver};
pub use options::{ClassifyOptions, HeadingStrategy, RouteMode};
pub use profile::profile_styles;
pub use standard::StandardClassifier;
pub use title::{detect_title_block, detect_title_line};
pub use visual::VisualClassifier;

use crate::detect::PaletteStats;
use crate::model::{DocumentOutline, Heading, LineSummary, StyledFragment};

/// Stateless engine inferring a document outline from styled fragments.
///
/// The engine may be shared across threads and reused across documents;
/// every call works on freshly derived state only.
pub struct OutlineEngine {
    options: ClassifyOptions,
    assembler: Box<dyn LineAssembler>,
    observer: Box<dyn ClassifyObserver>,
    standard: StandardClassifier,
    visual: VisualClassifier,
}

impl OutlineEngine {
    /// Create an engine with the given options, the first-fit assembler,
    /// and the log-forwarding observer.
    pub fn new(options: ClassifyOptions) -> Self {
        Self {
            options,
            assembler: Box::new(FirstFitAssembler),
            observer: Box::new(LogObserver),
            standard: StandardClassifier::new(),
            visual: VisualClassifier::new(),
        }
    }

    /// Replace the event observer.
    pub fn with_observer(mut self, observer: Box<dyn ClassifyObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Replace the line assembler.
    pub fn with_assembler(mut self, assembler: Box<dyn LineAssembler>) -> Self {
        self.assembler = assembler;
        self
    }

    /// The engine's options.
    pub fn options(&self) -> &ClassifyOptions {
        &self.options
    }

    /// Infer the outline of one document.
    ///
    /// Never fails: an empty fragment list short-circuits to the untitled
    /// outline, and degenerate statistics fall back to defaults.
    pub fn infer(&self, fragments: &[StyledFragment]) -> DocumentOutline {
        if fragments.is_empty() {
            return DocumentOutline::untitled();
        }

        let summaries: Vec<LineSummary> = self
            .assembler
            .assemble(fragments)
            .iter()
            .map(|line| line.summarize())
            .collect();

        let profile = profile_styles(fragments);
        self.observer.on_event(&ClassifyEvent::ProfileComputed {
            profile: profile.clone(),
        });

        let stats = PaletteStats::from_fragments(fragments);
        let visual = match self.options.route {
            RouteMode::Auto => stats.is_visually_driven(),
            RouteMode::ForceStandard => false,
            RouteMode::ForceVisual => true,
        };
        self.observer.on_event(&ClassifyEvent::RouteSelected {
            visual,
            greyscale_ratio: stats.greyscale_ratio(),
        });

        let outline = if visual {
            self.visual
                .classify(&summaries, &self.options, self.observer.as_ref())
        } else {
            self.standard
                .classify(&summaries, &profile, &self.options, self.observer.as_ref())
        };
        self.observer.on_event(&ClassifyEvent::OutlineReady {
            headings: outline.headings.len(),
        });
        outline
    }
}

impl Default for OutlineEngine {
    fn default() -> Self {
        Self::new(ClassifyOptions::default())
    }
}

/// Stable-sort headings into reading order: page ascending, then the
/// vertical position of the line each heading text begins with.
pub(crate) fn sort_reading_order(headings: &mut [Heading], summaries: &[LineSummary]) {
    headings.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then_with(|| matched_y0(a, summaries).total_cmp(&matched_y0(b, summaries)))
    });
}

/// The y0 of the first summary on the heading's page whose text is a prefix
/// of the heading text; 0.0 when no line matches.
pub(crate) fn matched_y0(heading: &Heading, summaries: &[LineSummary]) -> f32 {
    summaries
        .iter()
        .find(|line| line.page == heading.page && heading.text.starts_with(&line.text))
        .map(|line| line.y0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;

    fn frag(text: &str, size: u32, bold: bool, page: u32, y0: f32) -> StyledFragment {
        StyledFragment {
            text: text.to_string(),
            font_size: size,
            font_name: "Arial".to_string(),
            is_bold: bold,
            color: 0,
            background_color: None,
            page,
            x0: 72.0,
            y0,
            x1: 200.0,
            y1: y0 + size as f32,
        }
    }

    #[test]
    fn test_empty_input_short_circuits() {
        assert_eq!(
            OutlineEngine::default().infer(&[]),
            DocumentOutline::untitled()
        );
    }

    #[test]
    fn test_route_override_forces_visual() {
        // Monochrome fragments, but the override sends them down the
        // visual path, which finds no candidates below size 14.
        let fragments = vec![
            frag("Title", 20, true, 1, 80.0),
            frag("Bold note", 10, true, 2, 100.0),
            frag("body", 10, false, 2, 200.0),
            frag("body", 10, false, 2, 220.0),
        ];
        let options = ClassifyOptions::new().with_route(RouteMode::ForceVisual);
        let outline = OutlineEngine::new(options).infer(&fragments);
        assert_eq!(outline.title, "Title");
        assert!(outline.headings.is_empty());
    }

    #[test]
    fn test_route_override_forces_standard() {
        // Chromatic backgrounds would route visual; the override keeps the
        // standard path, which excludes page-1 lines from candidacy.
        let mut colored = frag("Colorful", 18, false, 1, 200.0);
        colored.background_color = Some(0xFF00FF);
        let fragments = vec![frag("Title", 20, true, 1, 80.0), colored];
        let options = ClassifyOptions::new().with_route(RouteMode::ForceStandard);
        let outline = OutlineEngine::new(options).infer(&fragments);
        assert!(outline.headings.is_empty());
    }

    #[test]
    fn test_sort_reading_order_uses_matched_positions() {
        let summaries = vec![
            LineSummary {
                text: "Beta".to_string(),
                page: 2,
                y0: 300.0,
                ..LineSummary::default()
            },
            LineSummary {
                text: "Alpha".to_string(),
                page: 2,
                y0: 100.0,
                ..LineSummary::default()
            },
        ];
        let mut headings = vec![
            Heading::new("Beta", HeadingLevel::H1, 2),
            Heading::new("Alpha", HeadingLevel::H1, 2),
        ];
        sort_reading_order(&mut headings, &summaries);
        assert_eq!(headings[0].text, "Alpha");
        assert_eq!(headings[1].text, "Beta");
    }

    #[test]
    fn test_observer_receives_pipeline_events() {
        use std::sync::{Arc, Mutex};

        struct Recorder(Arc<Mutex<Vec<ClassifyEvent>>>);
        impl ClassifyObserver for Recorder {
            fn on_event(&self, event: &ClassifyEvent) {
                self.0.lock().unwrap().push(event.clone());
            }
        }

        let events = Arc::new(Mutex::new(Vec::new()));
        let engine = OutlineEngine::default().with_observer(Box::new(Recorder(events.clone())));
        engine.infer(&[frag("Solo", 12, false, 1, 100.0)]);

        let events = events.lock().unwrap();
        assert!(matches!(events[0], ClassifyEvent::ProfileComputed { .. }));
        assert!(matches!(
            events[1],
            ClassifyEvent::RouteSelected { visual: false, .. }
        ));
        assert!(matches!(
            events.last(),
            Some(ClassifyEvent::OutlineReady { .. })
        ));
    }
}
