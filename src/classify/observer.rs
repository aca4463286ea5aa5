//! Pipeline observation: events the engine reports while classifying.

use crate::model::StyleProfile;

/// An event emitted at a pipeline stage boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifyEvent {
    /// Body style computed
    ProfileComputed {
        /// The inferred body-text profile
        profile: StyleProfile,
    },
    /// Router decision made
    RouteSelected {
        /// Whether the visual classifier was selected
        visual: bool,
        /// Near-greyscale background share, absent without backgrounds
        greyscale_ratio: Option<f64>,
    },
    /// Repeated header/footer lines removed
    NoiseFiltered {
        /// Number of line summaries dropped
        removed: usize,
    },
    /// Title resolved
    TitleFound {
        /// The detected title text
        title: String,
    },
    /// Heading candidates selected
    CandidatesSelected {
        /// Number of candidate lines
        count: usize,
    },
    /// Final outline assembled
    OutlineReady {
        /// Number of headings in the outline
        headings: usize,
    },
}

/// Sink for classification events.
///
/// The engine reports progress here instead of logging from inside the
/// heuristics. Observers receive events; they cannot influence the pipeline.
pub trait ClassifyObserver: Send + Sync {
    /// Called once per pipeline event, in pipeline order.
    fn on_event(&self, event: &ClassifyEvent);
}

/// Forwards events to the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ClassifyObserver for LogObserver {
    fn on_event(&self, event: &ClassifyEvent) {
        match event {
            ClassifyEvent::ProfileComputed { profile } => {
                log::debug!(
                    "body text profile: {}pt '{}' bold={} color=#{:06X}",
                    profile.body_size,
                    profile.body_font_name,
                    profile.body_is_bold,
                    profile.body_color
                );
            }
            ClassifyEvent::RouteSelected {
                visual,
                greyscale_ratio,
            } => match greyscale_ratio {
                Some(ratio) => log::info!(
                    "{:.0}% of background colors are near-greyscale; using the {} classifier",
                    ratio * 100.0,
                    if *visual { "visual" } else { "standard" }
                ),
                None => log::info!(
                    "no background colors; using the {} classifier",
                    if *visual { "visual" } else { "standard" }
                ),
            },
            ClassifyEvent::NoiseFiltered { removed } => {
                log::debug!("removed {} repeated header/footer lines", removed);
            }
            ClassifyEvent::TitleFound { title } => {
                log::debug!("detected title: '{}'", title);
            }
            ClassifyEvent::CandidatesSelected { count } => {
                log::debug!("{} heading candidates selected", count);
            }
            ClassifyEvent::OutlineReady { headings } => {
                log::info!("classification complete: {} headings", headings);
            }
        }
    }
}

/// Discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ClassifyObserver for NullObserver {
    fn on_event(&self, _event: &ClassifyEvent) {}
}
