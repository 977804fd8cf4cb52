// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use serde::{Deserialize, Serialize};
use vitrine_event_state::SwipeConfig;
use vitrine_grid::GridParams;
use vitrine_nav::DEFAULT_MOBILE_BREAKPOINT;
use vitrine_timing::{DEFAULT_DEBOUNCE_MS, DEFAULT_TRANSITION_MS, Millis};

use crate::ConfigError;

/// Site-wide tunables.
///
/// Every field has a default, so a configuration file only needs the values
/// it changes:
///
/// ```toml
/// transition_ms = 450
///
/// [grid]
/// gap = 8.0
/// last_row_align = "center"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Quiet period after the last resize before the homepage relays out.
    pub resize_debounce_ms: Millis,
    /// Slide and lightbox transition duration; also the navigation lock.
    pub transition_ms: Millis,
    /// Viewport width at or below which pages use the mobile layout.
    pub mobile_breakpoint: f64,
    /// Homepage and gallery grid parameters.
    pub grid: GridParams,
    /// Slides (or gallery images) preloaded on each side of the current one.
    pub preload_radius: usize,
    /// Distance outside the viewport at which lazy thumbnails start loading.
    pub lazy_root_margin: f64,
    /// Swipe recognition thresholds.
    pub swipe: SwipeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: DEFAULT_DEBOUNCE_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            grid: GridParams::default(),
            preload_radius: 1,
            lazy_root_margin: 200.0,
            swipe: SwipeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded site configuration");
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_grid::LastRowAlign;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_documents_keep_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            transition_ms = 450

            [grid]
            gap = 8.0
            last_row_align = "center"

            [swipe]
            min_distance = 30.0
            "#,
        )
        .unwrap();
        assert_eq!(config.transition_ms, 450);
        assert_eq!(config.resize_debounce_ms, 100);
        assert_eq!(config.grid.gap, 8.0);
        assert_eq!(config.grid.padding, GridParams::default().padding);
        assert_eq!(config.grid.last_row_align, LastRowAlign::Center);
        assert_eq!(config.swipe.min_distance, 30.0);
        assert_eq!(config.swipe.max_duration, 800);
    }

    #[test]
    fn bad_types_are_reported() {
        let err = SiteConfig::from_toml_str("transition_ms = \"slow\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn toml_output_parses_back() {
        let config = SiteConfig {
            preload_radius: 2,
            ..SiteConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(SiteConfig::from_toml_str(&text).unwrap(), config);
    }
}
