//! Data model for document structure inference.
//!
//! This module defines the types that flow through the inference pipeline:
//! styled fragments in, assembled lines and style profiles in the middle,
//! and document outlines out. All entities are created fresh per document
//! and never mutated after construction.

mod fragment;
mod line;
mod outline;
mod style;

pub use fragment::{font_name_implies_bold, strip_subset_prefix, StyledFragment};
pub use line::{Line, LineSummary};
pub use outline::{DocumentOutline, Heading, HeadingLevel, UNTITLED_TITLE};
pub use style::StyleProfile;
