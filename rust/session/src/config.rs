// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session configuration.

use serde::{Deserialize, Serialize};
use wallhang_geometry::NodeStyle;

/// Settings shared by every transition of a session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Appearance of the indicator, adjuster and painting nodes.
    pub style: NodeStyle,
}

impl SessionConfig {
    pub fn with_style(style: NodeStyle) -> Self {
        Self { style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"style":{"adjuster_opacity":0.3}}"#).unwrap();

        assert_eq!(config.style.adjuster_opacity, 0.3);
        assert_eq!(config.style.indicator_distance, 0.2);
        assert_eq!(config.style.dimensions.width, 0.53);
    }
}
