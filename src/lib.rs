//! # outliner
//!
//! Document structure inference for Rust.
//!
//! This library recovers a document's logical skeleton (a title plus an
//! H1-H3 heading hierarchy) from a flat list of positioned, styled text
//! fragments, using only geometric and typographic signals. No markup,
//! bookmarks, or manual annotation required.
//!
//! ## Quick Start
//!
//! ```
//! use outliner::{infer_outline, StyledFragment};
//!
//! let body = StyledFragment {
//!     text: "The quick brown fox jumps over the lazy dog.".into(),
//!     font_size: 10,
//!     font_name: "Georgia".into(),
//!     is_bold: false,
//!     color: 0x000000,
//!     background_color: None,
//!     page: 2,
//!     x0: 72.0, y0: 200.0, x1: 400.0, y1: 212.0,
//! };
//! let more_body = StyledFragment { y0: 220.0, ..body.clone() };
//! let heading = StyledFragment {
//!     text: "1. Introduction".into(),
//!     font_size: 16,
//!     is_bold: true,
//!     y0: 140.0,
//!     ..body.clone()
//! };
//!
//! let outline = infer_outline(&[heading, body, more_body]);
//! assert_eq!(outline.headings[0].text, "1. Introduction");
//! ```
//!
//! ## Features
//!
//! - **Title + H1-H3 hierarchy** from style deviation and numbering
//! - **Two strategies**: style-driven for monochrome documents, visual-cue
//!   for color-driven layouts, selected automatically from the palette
//! - **Noise suppression**: repeated headers/footers and ToC lines
//! - **Deterministic output**: stable sorts, document-order tie breaks
//! - **Parallel batch inference**: independent documents via Rayon

pub mod classify;
pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use classify::{
    ClassifyEvent, ClassifyObserver, ClassifyOptions, FirstFitAssembler, HeadingStrategy,
    LineAssembler, LogObserver, NoiseBands, NullObserver, OutlineEngine, RouteMode,
};
pub use convert::{convert_bytes, convert_path, ConvertOptions, ErrorMode};
pub use detect::{is_visually_driven, PaletteStats};
pub use error::{Error, Result};
pub use model::{
    DocumentOutline, Heading, HeadingLevel, Line, LineSummary, StyleProfile, StyledFragment,
};
pub use render::{to_json, JsonFormat};

use rayon::prelude::*;

/// Infer the outline of a single document with default options.
///
/// Never fails; degenerate input yields an untitled, empty outline.
pub fn infer_outline(fragments: &[StyledFragment]) -> DocumentOutline {
    OutlineEngine::default().infer(fragments)
}

/// Infer the outline of a single document with custom options.
///
/// # Example
///
/// ```
/// use outliner::{infer_outline_with_options, ClassifyOptions, RouteMode};
///
/// let options = ClassifyOptions::new().with_route(RouteMode::ForceStandard);
/// let outline = infer_outline_with_options(&[], options);
/// assert_eq!(outline.title, "Untitled Document");
/// ```
pub fn infer_outline_with_options(
    fragments: &[StyledFragment],
    options: ClassifyOptions,
) -> DocumentOutline {
    OutlineEngine::new(options).infer(fragments)
}

/// Infer outlines for many documents in parallel.
///
/// Documents share no state, so inference is data-parallel; results come
/// back in input order.
pub fn infer_outlines(
    documents: &[Vec<StyledFragment>],
    options: &ClassifyOptions,
) -> Vec<DocumentOutline> {
    let engine = OutlineEngine::new(options.clone());
    documents
        .par_iter()
        .map(|fragments| engine.infer(fragments))
        .collect()
}

/// Serialize an outline to the `{"title", "outline"}` wire format.
pub fn outline_to_json(outline: &DocumentOutline, format: JsonFormat) -> Result<String> {
    render::to_json(outline, format)
}

/// Builder for configuring and running outline inference.
///
/// # Example
///
/// ```
/// use outliner::{HeadingStrategy, Outliner};
///
/// let outline = Outliner::new()
///     .with_strategy(HeadingStrategy::StandardWithHierarchyPruning)
///     .with_page_height(792.0)
///     .infer(&[]);
/// assert!(outline.is_empty());
/// ```
pub struct Outliner {
    options: ClassifyOptions,
}

impl Outliner {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ClassifyOptions::default(),
        }
    }

    /// Set the standard-path level-assignment strategy.
    pub fn with_strategy(mut self, strategy: HeadingStrategy) -> Self {
        self.options = self.options.with_strategy(strategy);
        self
    }

    /// Override the palette router.
    pub fn with_route(mut self, route: RouteMode) -> Self {
        self.options = self.options.with_route(route);
        self
    }

    /// Set the header/footer band fractions.
    pub fn with_noise_bands(mut self, bands: NoiseBands) -> Self {
        self.options = self.options.with_noise_bands(bands);
        self
    }

    /// Supply the page height so noise bands resolve as fractions of it.
    pub fn with_page_height(mut self, height: f32) -> Self {
        self.options = self.options.with_page_height(height);
        self
    }

    /// Set the minimum visual-path heading font size.
    pub fn with_min_visual_heading_size(mut self, size: u32) -> Self {
        self.options = self.options.with_min_visual_heading_size(size);
        self
    }

    /// Force a level for an exact line text on the visual path.
    pub fn with_level_override(mut self, text: impl Into<String>, level: HeadingLevel) -> Self {
        self.options = self.options.with_level_override(text, level);
        self
    }

    /// Infer the outline of one document.
    pub fn infer(&self, fragments: &[StyledFragment]) -> DocumentOutline {
        OutlineEngine::new(self.options.clone()).infer(fragments)
    }

    /// Infer and serialize in one step.
    pub fn infer_to_json(
        &self,
        fragments: &[StyledFragment],
        format: JsonFormat,
    ) -> Result<String> {
        render::to_json(&self.infer(fragments), format)
    }
}

impl Default for Outliner {
    fn default() -> Self {
        Self::new()
    }
}
