//! Body-text style fingerprint.

use serde::{Deserialize, Serialize};

/// Statistical profile of a document's dominant (body) text style.
///
/// Serves as the baseline the classifiers measure deviation against. The
/// zero/empty default is the degenerate profile for documents with no
/// fragments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    /// Most common font size across all fragments
    pub body_size: u32,
    /// Most common font family at the body size
    pub body_font_name: String,
    /// Most common boldness at the body size
    pub body_is_bold: bool,
    /// Most common foreground color at the body size
    pub body_color: u32,
}
