//! Body-style profiling.

use std::collections::HashMap;
use std::hash::Hash;

use crate::model::{StyleProfile, StyledFragment};

/// Compute the dominant body-text style of a fragment set.
///
/// The body size is the statistical mode of all fragment sizes; ties go to
/// the size encountered first in document order. The family/weight/color
/// triple is then the mode among fragments at that size, with the same tie
/// rule. Degenerate inputs yield the zero/empty default profile.
pub fn profile_styles(fragments: &[StyledFragment]) -> StyleProfile {
    if fragments.is_empty() {
        log::warn!("no fragments to profile; using the empty style profile");
        return StyleProfile::default();
    }

    let body_size = match stable_mode(fragments.iter().map(|f| f.font_size)) {
        Some(size) => size,
        None => return StyleProfile::default(),
    };

    let dominant = stable_mode(
        fragments
            .iter()
            .filter(|f| f.font_size == body_size)
            .map(|f| (f.font_name.clone(), f.is_bold, f.color)),
    );

    match dominant {
        Some((body_font_name, body_is_bold, body_color)) => StyleProfile {
            body_size,
            body_font_name,
            body_is_bold,
            body_color,
        },
        None => {
            log::warn!("no fragments at the body size {}; style fields default", body_size);
            StyleProfile {
                body_size,
                ..StyleProfile::default()
            }
        }
    }
}

/// Mode of an iterator of keys, ties broken by first encounter.
fn stable_mode<K: Eq + Hash + Clone>(keys: impl Iterator<Item = K>) -> Option<K> {
    let mut counts: HashMap<K, usize> = HashMap::new();
    let mut order: Vec<K> = Vec::new();
    for key in keys {
        let slot = counts.entry(key.clone()).or_insert(0);
        if *slot == 0 {
            order.push(key);
        }
        *slot += 1;
    }

    let mut best: Option<(K, usize)> = None;
    for key in order {
        let count = counts[&key];
        match &best {
            Some((_, best_count)) if *best_count >= count => {}
            _ => best = Some((key, count)),
        }
    }
    best.map(|(key, _)| key)
}
