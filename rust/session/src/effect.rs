// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Side effects produced by a transition.
//!
//! Effects are data. [`crate::Session`] applies them to its own record and
//! forwards the scene-facing ones to a [`crate::SceneHost`], so the decision
//! logic never touches a render graph.

use serde::{Deserialize, Serialize};
use wallhang_geometry::{NodeKind, NodeSpec, Pose};

use crate::error::PlacementError;
use crate::state::TrackingQuality;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Remember the latest tracking quality.
    SetTracking { quality: TrackingQuality },
    /// Store the floor anchor and register it with the tracking session.
    SetAnchor { anchor: Pose },
    /// Forget the floor anchor and unregister it.
    ClearAnchor,
    /// Instantiate a node, replacing any live node of the same kind.
    AddNode { node: NodeSpec },
    RemoveNode { kind: NodeKind },
    SetNodesHidden { hidden: bool },
    SetGuideText { text: String },
    /// Surface a placement failure to the user.
    ReportError { error: PlacementError },
}

impl Effect {
    pub fn guide(text: &str) -> Self {
        Effect::SetGuideText {
            text: text.to_string(),
        }
    }

    /// True for effects that mutate the render graph.
    pub fn touches_scene(&self) -> bool {
        matches!(
            self,
            Effect::AddNode { .. } | Effect::RemoveNode { .. } | Effect::SetNodesHidden { .. }
        )
    }
}
