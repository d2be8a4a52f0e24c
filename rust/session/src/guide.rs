// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! On-screen guidance text.

use serde::{Deserialize, Serialize};

use crate::state::{PaintingState, TrackingQuality};

const ALIGN_BASEBOARD: &str = "Align the white line with the baseboard \n and tap the screen";
const LIFT_PAINTING: &str = "Lift the paingting on the wall \n and tap the screen";
const REMOVE_PAINTING: &str = "Remove the painting by tapping the screen";
const RECOVER_TRACKING: &str = "Point towards the floow and move the phone";

/// Guidance message for a state under the given tracking quality.
///
/// The message strings are user-facing copy and are kept verbatim.
pub fn guide_text(state: PaintingState, tracking: TrackingQuality) -> &'static str {
    if !tracking.is_normal() {
        return RECOVER_TRACKING;
    }

    match state {
        PaintingState::NoAnchor => ALIGN_BASEBOARD,
        PaintingState::AnchorSet => LIFT_PAINTING,
        PaintingState::PlacementCommitted => REMOVE_PAINTING,
    }
}

/// How the guide label should be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuideLabel {
    pub hidden: bool,
    pub text: String,
}

impl GuideLabel {
    /// Empty text hides the label; anything else is padded by one space per side.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            Self {
                hidden: true,
                text: String::new(),
            }
        } else {
            Self {
                hidden: false,
                text: format!(" {} ", text),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_tracking_messages_follow_state() {
        let normal = TrackingQuality::Normal;
        assert_eq!(
            guide_text(PaintingState::NoAnchor, normal),
            "Align the white line with the baseboard \n and tap the screen"
        );
        assert_eq!(
            guide_text(PaintingState::AnchorSet, normal),
            "Lift the paingting on the wall \n and tap the screen"
        );
        assert_eq!(
            guide_text(PaintingState::PlacementCommitted, normal),
            "Remove the painting by tapping the screen"
        );
    }

    #[test]
    fn degraded_tracking_always_asks_to_recover() {
        for tracking in [TrackingQuality::Limited, TrackingQuality::Unavailable] {
            for state in [
                PaintingState::NoAnchor,
                PaintingState::AnchorSet,
                PaintingState::PlacementCommitted,
            ] {
                assert_eq!(
                    guide_text(state, tracking),
                    "Point towards the floow and move the phone"
                );
            }
        }
    }

    #[test]
    fn label_pads_text() {
        let label = GuideLabel::from_text("Remove the painting by tapping the screen");
        assert!(!label.hidden);
        assert_eq!(label.text, " Remove the painting by tapping the screen ");
    }

    #[test]
    fn empty_text_hides_label() {
        assert!(GuideLabel::from_text("").hidden);
    }
}
