//! Style-deviation heading classification for monochrome documents.
//!
//! Recovers the heading hierarchy from typographic deviation against the
//! body style: noise suppression, title detection, candidate selection,
//! style ranking, and numbering-aware level assignment.

use std::collections::HashMap;

use regex::Regex;

use super::noise::{filter_repeated_bands, TocDetector};
use super::observer::{ClassifyEvent, ClassifyObserver};
use super::options::{ClassifyOptions, HeadingStrategy};
use super::sort_reading_order;
use super::title::detect_title_block;
use crate::model::{DocumentOutline, Heading, HeadingLevel, LineSummary, StyleProfile};

/// Minimum size step above body text for a size-based candidate.
const MIN_HEADING_SIZE_INCREASE: u32 = 2;

/// Candidates at or above this word count are rejected.
const MAX_HEADING_WORD_COUNT: usize = 35;

/// Multi-heuristic classifier for text-centric documents.
#[derive(Debug)]
pub struct StandardClassifier {
    toc: TocDetector,
    numeric_prefix: Regex,
    digit_run: Regex,
}

impl StandardClassifier {
    /// Compile the classifier's patterns.
    pub fn new() -> Self {
        Self {
            toc: TocDetector::new(),
            numeric_prefix: Regex::new(r"^((\d+\.)+\d*)\s+").unwrap(),
            digit_run: Regex::new(r"\d+").unwrap(),
        }
    }

    /// Classify line summaries into a document outline.
    pub fn classify(
        &self,
        summaries: &[LineSummary],
        profile: &StyleProfile,
        options: &ClassifyOptions,
        observer: &dyn ClassifyObserver,
    ) -> DocumentOutline {
        if summaries.is_empty() {
            return DocumentOutline::untitled();
        }

        let (header_limit, footer_limit) = options.noise_bands.resolve(options.page_height);
        let before = summaries.len();
        let clean = filter_repeated_bands(summaries.to_vec(), header_limit, footer_limit);
        observer.on_event(&ClassifyEvent::NoiseFiltered {
            removed: before - clean.len(),
        });

        let (title, _title_end) = detect_title_block(&clean);
        observer.on_event(&ClassifyEvent::TitleFound {
            title: title.clone(),
        });

        let candidates: Vec<&LineSummary> = clean
            .iter()
            .filter(|line| {
                // The title consumed page 1; nothing there can be a heading
                if line.page == 1 {
                    return false;
                }
                if self.toc.is_toc_entry(&line.text) {
                    return false;
                }
                if line.word_count >= MAX_HEADING_WORD_COUNT {
                    return false;
                }
                (line.is_bold && !profile.body_is_bold)
                    || line.font_size >= profile.body_size + MIN_HEADING_SIZE_INCREASE
            })
            .collect();
        observer.on_event(&ClassifyEvent::CandidatesSelected {
            count: candidates.len(),
        });

        if candidates.is_empty() {
            return DocumentOutline::new(title, Vec::new());
        }

        let ranked = rank_heading_styles(&candidates);
        let level_map = level_map_from_rank(&ranked);
        let mut headings = self.assign_levels(&candidates, &level_map);
        sort_reading_order(&mut headings, &clean);
        if options.strategy == HeadingStrategy::StandardWithHierarchyPruning {
            prune_hierarchy(&mut headings);
        }

        DocumentOutline::new(title, headings)
    }

    fn assign_levels(
        &self,
        candidates: &[&LineSummary],
        level_map: &HashMap<u32, HeadingLevel>,
    ) -> Vec<Heading> {
        let mut headings = Vec::new();
        for line in candidates {
            let level = self
                .numeric_prefix_level(&line.text)
                .or_else(|| level_map.get(&line.font_size).copied());
            if let Some(level) = level {
                headings.push(Heading::new(line.text.clone(), level, line.page));
            }
        }
        headings
    }

    /// Level implied by a dotted numeric prefix ("2.1.3 ..."), if any.
    ///
    /// The group count maps directly to the level; counts outside 1..=3
    /// yield nothing and fall through to the style ranking.
    fn numeric_prefix_level(&self, text: &str) -> Option<HeadingLevel> {
        let prefix = self.numeric_prefix.find(text)?;
        let groups = self.digit_run.find_iter(prefix.as_str()).count();
        if (1..=3).contains(&groups) {
            HeadingLevel::from_depth(groups as u8)
        } else {
            None
        }
    }
}

impl Default for StandardClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank candidate style triples by font size, then frequency.
///
/// Ties keep first-encounter order, so the ranking is deterministic for a
/// given candidate sequence.
fn rank_heading_styles<'a>(candidates: &[&'a LineSummary]) -> Vec<(u32, &'a str, bool)> {
    let mut counts: HashMap<(u32, &str, bool), usize> = HashMap::new();
    let mut order: Vec<(u32, &'a str, bool)> = Vec::new();
    for line in candidates {
        let key = (line.font_size, line.font_name.as_str(), line.is_bold);
        let slot = counts.entry(key).or_insert(0);
        if *slot == 0 {
            order.push(key);
        }
        *slot += 1;
    }

    order.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| counts[b].cmp(&counts[a])));
    order
}

/// Map the largest three ranked font sizes to H1..H3.
fn level_map_from_rank(ranked: &[(u32, &str, bool)]) -> HashMap<u32, HeadingLevel> {
    let mut sizes: Vec<u32> = ranked.iter().map(|style| style.0).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.dedup();

    sizes
        .into_iter()
        .take(3)
        .enumerate()
        .filter_map(|(index, size)| {
            HeadingLevel::from_depth(index as u8 + 1).map(|level| (size, level))
        })
        .collect()
}

/// Clamp heading depths so a child never precedes its parent.
///
/// Walks the final reading order; a heading deeper than its predecessor's
/// depth + 1 is clamped to that depth, and the first heading clamps to H1.
fn prune_hierarchy(headings: &mut [Heading]) {
    let mut prev_depth = 0u8;
    for heading in headings.iter_mut() {
        let clamped = heading.level.depth().min(prev_depth + 1);
        if clamped != heading.level.depth() {
            if let Some(level) = HeadingLevel::from_depth(clamped) {
                heading.level = level;
            }
        }
        prev_depth = clamped;
    }
}
