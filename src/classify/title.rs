//! Title detection on the first page.

use crate::model::{LineSummary, UNTITLED_TITLE};

/// Standard rule: the contiguous run of first-page lines set at the page's
/// maximum font size.
///
/// Returns the joined title text and the index of the last consumed line in
/// `summaries`, or `(UNTITLED_TITLE, -1)` when the first page has no lines.
/// The scan walks `summaries` in document order and stops at the first
/// non-matching line once the run has begun.
pub fn detect_title_block(summaries: &[LineSummary]) -> (String, isize) {
    let max_size = summaries
        .iter()
        .filter(|line| line.page == 1)
        .map(|line| line.font_size)
        .max();
    let max_size = match max_size {
        Some(size) => size,
        None => return (UNTITLED_TITLE.to_string(), -1),
    };

    let mut parts: Vec<&str> = Vec::new();
    let mut end_index: isize = -1;
    for (index, line) in summaries.iter().enumerate() {
        if line.page == 1 && line.font_size == max_size {
            parts.push(&line.text);
            end_index = index as isize;
        } else if !parts.is_empty() {
            break;
        }
    }

    let joined = parts.join(" ");
    if joined.is_empty() {
        (UNTITLED_TITLE.to_string(), end_index)
    } else {
        (joined, end_index)
    }
}

/// Visual rule: the single first-page line with the maximum font size.
///
/// Ties go to the first line in document order. Returns `UNTITLED_TITLE`
/// when the first page has no lines.
pub fn detect_title_line(summaries: &[LineSummary]) -> String {
    let mut best: Option<&LineSummary> = None;
    for line in summaries.iter().filter(|line| line.page == 1) {
        match best {
            Some(current) if current.font_size >= line.font_size => {}
            _ => best = Some(line),
        }
    }
    best.map(|line| line.text.clone())
        .unwrap_or_else(|| UNTITLED_TITLE.to_string())
}
