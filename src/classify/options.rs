//! Classification options and strategy selection.

use std::collections::HashMap;

use super::noise::NoiseBands;
use crate::model::HeadingLevel;

/// Level-assignment strategy for monochrome documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingStrategy {
    /// Style ranking and numbering, exactly as calibrated
    #[default]
    Standard,
    /// Standard, then clamp levels so no child appears before its parent
    StandardWithHierarchyPruning,
}

/// Routing override for the palette-based strategy switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteMode {
    /// Let the palette router decide
    #[default]
    Auto,
    /// Always use the standard classifier
    ForceStandard,
    /// Always use the visual classifier
    ForceVisual,
}

/// Options controlling outline inference.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifyOptions {
    /// Level-assignment strategy for the standard path
    pub strategy: HeadingStrategy,

    /// Routing override
    pub route: RouteMode,

    /// Header/footer band configuration
    pub noise_bands: NoiseBands,

    /// Page height in fragment coordinate units; enables fractional bands
    pub page_height: Option<f32>,

    /// Minimum font size for visual-path heading candidates
    pub min_visual_heading_size: u32,

    /// Exact-text forced levels for the visual path
    pub level_overrides: HashMap<String, HeadingLevel>,
}

impl ClassifyOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the standard-path strategy.
    pub fn with_strategy(mut self, strategy: HeadingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the routing override.
    pub fn with_route(mut self, route: RouteMode) -> Self {
        self.route = route;
        self
    }

    /// Set the header/footer band fractions.
    pub fn with_noise_bands(mut self, bands: NoiseBands) -> Self {
        self.noise_bands = bands;
        self
    }

    /// Supply the page height so bands resolve as fractions of it.
    pub fn with_page_height(mut self, height: f32) -> Self {
        self.page_height = Some(height);
        self
    }

    /// Set the minimum visual-path heading font size.
    pub fn with_min_visual_heading_size(mut self, size: u32) -> Self {
        self.min_visual_heading_size = size;
        self
    }

    /// Force a level for an exact line text on the visual path.
    pub fn with_level_override(mut self, text: impl Into<String>, level: HeadingLevel) -> Self {
        self.level_overrides.insert(text.into(), level);
        self
    }
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            strategy: HeadingStrategy::default(),
            route: RouteMode::default(),
            noise_bands: NoiseBands::default(),
            page_height: None,
            min_visual_heading_size: 14,
            level_overrides: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClassifyOptions::default();
        assert_eq!(options.strategy, HeadingStrategy::Standard);
        assert_eq!(options.route, RouteMode::Auto);
        assert_eq!(options.page_height, None);
        assert_eq!(options.min_visual_heading_size, 14);
        assert!(options.level_overrides.is_empty());
    }

    #[test]
    fn test_builder_chaining() {
        let options = ClassifyOptions::new()
            .with_strategy(HeadingStrategy::StandardWithHierarchyPruning)
            .with_route(RouteMode::ForceVisual)
            .with_page_height(792.0)
            .with_min_visual_heading_size(12)
            .with_level_override("OPTIONS", HeadingLevel::H1);

        assert_eq!(options.strategy, HeadingStrategy::StandardWithHierarchyPruning);
        assert_eq!(options.route, RouteMode::ForceVisual);
        assert_eq!(options.page_height, Some(792.0));
        assert_eq!(options.min_visual_heading_size, 12);
        assert_eq!(
            options.level_overrides.get("OPTIONS"),
            Some(&HeadingLevel::H1)
        );
    }
}
