// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement state machine.
//!
//! [`transition`] maps `(record, event)` to the next [`PaintingState`] and the
//! [`Effect`]s needed to get there. It reads the record but never mutates it.
//!
//! Taps only advance the workflow under normal tracking. A tap under degraded
//! tracking, or a tap whose inputs are missing, resets the session to
//! `NoAnchor` instead.

use serde::{Deserialize, Serialize};
use wallhang_geometry::{
    adjuster_preview, baseboard_indicator, compute_floor_anchor, painting, NodeKind, Pose,
};

use crate::config::SessionConfig;
use crate::effect::Effect;
use crate::error::{PlacementError, Result};
use crate::guide::guide_text;
use crate::session::SessionRecord;
use crate::state::{PaintingState, TrackingQuality};

/// Snapshot of tracking data taken when the user taps.
///
/// The hit-test itself (screen point to floor plane) is the host's job; only
/// its world-space result is passed in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TapInput {
    pub camera: Option<Pose>,
    pub hit: Option<Pose>,
}

impl TapInput {
    pub fn new(camera: Option<Pose>, hit: Option<Pose>) -> Self {
        Self { camera, hit }
    }

    /// Tap with a camera pose and a floor hit.
    pub fn with_hit(camera: Pose, hit: Pose) -> Self {
        Self::new(Some(camera), Some(hit))
    }

    /// Tap with a camera pose only.
    pub fn with_camera(camera: Pose) -> Self {
        Self::new(Some(camera), None)
    }
}

/// Discrete inputs to the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TrackingChanged { quality: TrackingQuality },
    Tap(TapInput),
}

/// Outcome of one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: PaintingState,
    pub to: PaintingState,
    pub effects: Vec<Effect>,
}

impl Transition {
    /// The placement error that forced a reset, if any.
    pub fn error(&self) -> Option<PlacementError> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::ReportError { error } => Some(*error),
            _ => None,
        })
    }

    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Computes the response to `event` without applying it.
pub fn transition(record: &SessionRecord, config: &SessionConfig, event: &Event) -> Transition {
    match event {
        Event::TrackingChanged { quality } => tracking_changed(record, *quality),
        Event::Tap(input) if record.tracking().is_normal() => tap(record, config, input),
        Event::Tap(_) => reset(record, config, None),
    }
}

/// Effects that bring a fresh session on screen.
pub fn initial(config: &SessionConfig) -> Transition {
    let state = PaintingState::NoAnchor;
    Transition {
        from: state,
        to: state,
        effects: vec![
            Effect::guide(guide_text(state, TrackingQuality::default())),
            Effect::AddNode {
                node: baseboard_indicator(&config.style),
            },
        ],
    }
}

/// Tears everything down back to `NoAnchor`.
///
/// The baseboard indicator is shown again only while tracking is normal.
pub fn reset(
    record: &SessionRecord,
    config: &SessionConfig,
    error: Option<PlacementError>,
) -> Transition {
    let mut effects = Vec::new();

    if let Some(error) = error {
        effects.push(Effect::ReportError { error });
    }
    if record.has_node(NodeKind::Painting) {
        effects.push(Effect::RemoveNode {
            kind: NodeKind::Painting,
        });
    }
    if record.has_node(NodeKind::Adjuster) {
        effects.push(Effect::RemoveNode {
            kind: NodeKind::Adjuster,
        });
    }
    if record.anchor().is_some() {
        effects.push(Effect::ClearAnchor);
    }

    let tracking = record.tracking();
    let has_indicator = record.has_node(NodeKind::BaseboardIndicator);
    if tracking.is_normal() && !has_indicator {
        effects.push(Effect::AddNode {
            node: baseboard_indicator(&config.style),
        });
    } else if !tracking.is_normal() && has_indicator {
        effects.push(Effect::RemoveNode {
            kind: NodeKind::BaseboardIndicator,
        });
    }

    effects.push(Effect::guide(guide_text(PaintingState::NoAnchor, tracking)));

    Transition {
        from: record.state(),
        to: PaintingState::NoAnchor,
        effects,
    }
}

fn tracking_changed(record: &SessionRecord, quality: TrackingQuality) -> Transition {
    let state = record.state();
    Transition {
        from: state,
        to: state,
        effects: vec![
            Effect::SetTracking { quality },
            Effect::SetNodesHidden {
                hidden: !quality.is_normal(),
            },
            Effect::guide(guide_text(state, quality)),
        ],
    }
}

fn tap(record: &SessionRecord, config: &SessionConfig, input: &TapInput) -> Transition {
    let from = record.state();
    let step = match from {
        PaintingState::NoAnchor => set_anchor(record, config, input),
        PaintingState::AnchorSet => commit(record, config, input),
        PaintingState::PlacementCommitted => Ok(remove_painting(record, config)),
    };

    match step {
        Ok(mut effects) => {
            let to = from.next();
            effects.push(Effect::guide(guide_text(to, record.tracking())));
            Transition { from, to, effects }
        }
        Err(error) => reset(record, config, Some(error)),
    }
}

fn set_anchor(
    record: &SessionRecord,
    config: &SessionConfig,
    input: &TapInput,
) -> Result<Vec<Effect>> {
    let hit = input.hit.as_ref().ok_or(PlacementError::NoHitFound)?;
    let camera = input
        .camera
        .as_ref()
        .ok_or(PlacementError::MissingCameraPose)?;

    let anchor = compute_floor_anchor(hit, camera.euler_angles().yaw);

    let mut effects = vec![Effect::SetAnchor { anchor }];
    if record.has_node(NodeKind::BaseboardIndicator) {
        effects.push(Effect::RemoveNode {
            kind: NodeKind::BaseboardIndicator,
        });
    }
    effects.push(Effect::AddNode {
        node: adjuster_preview(camera, &anchor, &config.style),
    });

    Ok(effects)
}

fn commit(record: &SessionRecord, config: &SessionConfig, input: &TapInput) -> Result<Vec<Effect>> {
    let anchor = record.anchor().ok_or(PlacementError::MissingAnchor)?;
    let camera = input
        .camera
        .as_ref()
        .ok_or(PlacementError::MissingCameraPose)?;

    let mut effects = vec![Effect::AddNode {
        node: painting(anchor, camera, &config.style),
    }];
    if record.has_node(NodeKind::Adjuster) {
        effects.push(Effect::RemoveNode {
            kind: NodeKind::Adjuster,
        });
    }

    Ok(effects)
}

fn remove_painting(record: &SessionRecord, config: &SessionConfig) -> Vec<Effect> {
    let mut effects = Vec::new();

    if record.has_node(NodeKind::Painting) {
        effects.push(Effect::RemoveNode {
            kind: NodeKind::Painting,
        });
    }
    if record.anchor().is_some() {
        effects.push(Effect::ClearAnchor);
    }
    if !record.has_node(NodeKind::BaseboardIndicator) {
        effects.push(Effect::AddNode {
            node: baseboard_indicator(&config.style),
        });
    }

    effects
}
