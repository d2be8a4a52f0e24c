// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Workflow state and tracking quality.

use serde::{Deserialize, Serialize};

/// Where the user is in the placement cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintingState {
    /// Guide line visible, waiting for the baseboard tap.
    #[default]
    NoAnchor,
    /// Floor anchor stored, adjuster preview following the camera.
    AnchorSet,
    /// Painting locked onto the wall.
    PlacementCommitted,
}

impl PaintingState {
    /// State reached by a successful tap.
    pub fn next(self) -> Self {
        match self {
            PaintingState::NoAnchor => PaintingState::AnchorSet,
            PaintingState::AnchorSet => PaintingState::PlacementCommitted,
            PaintingState::PlacementCommitted => PaintingState::NoAnchor,
        }
    }
}

/// Confidence of the tracking subsystem in its current pose estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingQuality {
    #[default]
    Unavailable,
    Limited,
    Normal,
}

impl TrackingQuality {
    /// Placement interactions are only allowed under normal tracking.
    pub fn is_normal(self) -> bool {
        self == TrackingQuality::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_taps_close_the_cycle() {
        let start = PaintingState::NoAnchor;
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn only_normal_tracking_allows_placement() {
        assert!(TrackingQuality::Normal.is_normal());
        assert!(!TrackingQuality::Limited.is_normal());
        assert!(!TrackingQuality::Unavailable.is_normal());
    }

    #[test]
    fn tracking_quality_parses_lowercase() {
        let quality: TrackingQuality = serde_json::from_str("\"limited\"").unwrap();
        assert_eq!(quality, TrackingQuality::Limited);
    }
}
