use serde::Deserialize;

use crate::error::{NavError, NavResult};

/// Scroll offset (px) past which the bar switches to the solid treatment.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Viewports narrower than this (px) get the compact menu.
pub const DEFAULT_COMPACT_BREAKPOINT_PX: f64 = 768.0;

/// Tunables for the navigation bar, provided as Dioxus context by the app.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub scroll_threshold_px: f64,
    pub compact_breakpoint_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            compact_breakpoint_px: DEFAULT_COMPACT_BREAKPOINT_PX,
        }
    }
}

impl NavbarConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> NavResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Self::from_json`], but logs the problem and returns the defaults
    /// instead of failing.
    pub fn load_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => {
                tracing::info!(
                    scroll_threshold_px = config.scroll_threshold_px,
                    compact_breakpoint_px = config.compact_breakpoint_px,
                    "navbar config loaded"
                );
                config
            }
            Err(e) => {
                tracing::warn!("{}; falling back to default navbar config", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> NavResult<()> {
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "scroll_threshold_px must be a non-negative number, got {}",
                self.scroll_threshold_px
            )));
        }
        if !self.compact_breakpoint_px.is_finite() || self.compact_breakpoint_px <= 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "compact_breakpoint_px must be positive, got {}",
                self.compact_breakpoint_px
            )));
        }
        Ok(())
    }

    /// Media query matching compact viewports, i.e. `width < compact_breakpoint_px`.
    ///
    /// Negating `min-width` keeps fractional widths (zoom, high-DPI) on the same
    /// side of the breakpoint as [`Self::is_compact_width`].
    pub fn compact_media_query(&self) -> String {
        format!("not all and (min-width: {}px)", self.compact_breakpoint_px)
    }

    /// Same classification as [`Self::compact_media_query`], for a measured width.
    pub fn is_compact_width(&self, width: f64) -> bool {
        width < self.compact_breakpoint_px
    }
}
