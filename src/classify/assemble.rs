//! Line assembly: grouping fragments into reading-order lines.

use std::collections::BTreeMap;

use crate::model::{Line, StyledFragment};

/// Vertical band within which fragments merge into one line.
pub const LINE_VERTICAL_TOLERANCE: f32 = 2.0;

/// Groups fragments into lines.
///
/// The trait is the seam for swapping the clustering policy without touching
/// the classifiers.
pub trait LineAssembler: Send + Sync {
    /// Group fragments into lines: pages ascending, lines top-to-bottom,
    /// fragments left-to-right. Empty input yields empty output.
    fn assemble(&self, fragments: &[StyledFragment]) -> Vec<Line>;
}

/// Greedy first-fit clustering by vertical position.
///
/// A fragment joins the first existing cluster on its page whose key lies
/// within [`LINE_VERTICAL_TOLERANCE`] of its y0; otherwise it opens a new
/// cluster keyed by its own y0. The clustering is order-sensitive, not an
/// interval merge; dense text can mis-group, and that behavior is kept
/// byte-for-byte compatible.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitAssembler;

impl LineAssembler for FirstFitAssembler {
    fn assemble(&self, fragments: &[StyledFragment]) -> Vec<Line> {
        if fragments.is_empty() {
            return Vec::new();
        }

        let mut pages: BTreeMap<u32, Vec<(f32, Vec<StyledFragment>)>> = BTreeMap::new();
        for fragment in fragments {
            let clusters = pages.entry(fragment.page).or_default();
            let found = clusters
                .iter_mut()
                .find(|(key, _)| (fragment.y0 - *key).abs() < LINE_VERTICAL_TOLERANCE);
            match found {
                Some((_, members)) => members.push(fragment.clone()),
                None => clusters.push((fragment.y0, vec![fragment.clone()])),
            }
        }

        let mut lines = Vec::new();
        for (page, mut clusters) in pages {
            clusters.sort_by(|a, b| a.0.total_cmp(&b.0));
            for (_, mut members) in clusters {
                members.sort_by(|a, b| a.x0.total_cmp(&b.x0));
                lines.push(Line {
                    page,
                    fragments: members,
                });
            }
        }
        lines
    }
}
