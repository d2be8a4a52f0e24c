// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Replay configuration loaded from environment variables.

use wallhang_geometry::NodeStyle;
use wallhang_session::SessionConfig;

/// Replay configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Opacity of the camera-attached painting preview.
    pub adjuster_opacity: f32,
    /// Distance of the baseboard guide line in front of the camera, in meters.
    pub indicator_distance: f64,
    /// Artwork asset shown on the painting's front face.
    pub artwork: String,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = NodeStyle::default();
        Self {
            adjuster_opacity: std::env::var("WALLHANG_ADJUSTER_OPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &f32| (0.0..=1.0).contains(v))
                .unwrap_or(defaults.adjuster_opacity),
            indicator_distance: std::env::var("WALLHANG_INDICATOR_DISTANCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &f64| v.is_finite() && *v > 0.0)
                .unwrap_or(defaults.indicator_distance),
            artwork: std::env::var("WALLHANG_ARTWORK").unwrap_or(defaults.artwork),
            log_filter: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,wallhang_session=debug".into()),
        }
    }

    /// Session settings derived from this configuration.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::with_style(NodeStyle {
            adjuster_opacity: self.adjuster_opacity,
            indicator_distance: self.indicator_distance,
            artwork: self.artwork.clone(),
            ..NodeStyle::default()
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
