// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The owned placement session.
//!
//! [`SessionRecord`] holds everything that outlives a single event: workflow
//! state, tracking quality, the stored floor anchor and the set of live
//! nodes. [`Session`] runs events through [`crate::machine::transition`] and
//! interprets the resulting effects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use wallhang_geometry::{NodeKind, NodeSpec, Pose};

use crate::config::SessionConfig;
use crate::effect::Effect;
use crate::guide::{guide_text, GuideLabel};
use crate::machine::{self, Event, TapInput, Transition};
use crate::scene::SceneHost;
use crate::state::{PaintingState, TrackingQuality};

/// Session-level placement data.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    state: PaintingState,
    tracking: TrackingQuality,
    anchor: Option<Pose>,
    nodes: BTreeMap<NodeKind, NodeSpec>,
    nodes_hidden: bool,
    guide_text: String,
}

impl SessionRecord {
    pub fn new() -> Self {
        let state = PaintingState::default();
        let tracking = TrackingQuality::default();
        Self {
            state,
            tracking,
            anchor: None,
            nodes: BTreeMap::new(),
            nodes_hidden: false,
            guide_text: guide_text(state, tracking).to_string(),
        }
    }

    pub fn state(&self) -> PaintingState {
        self.state
    }

    pub fn tracking(&self) -> TrackingQuality {
        self.tracking
    }

    pub fn anchor(&self) -> Option<&Pose> {
        self.anchor.as_ref()
    }

    pub fn has_node(&self, kind: NodeKind) -> bool {
        self.nodes.contains_key(&kind)
    }

    pub fn node(&self, kind: NodeKind) -> Option<&NodeSpec> {
        self.nodes.get(&kind)
    }

    pub fn nodes_hidden(&self) -> bool {
        self.nodes_hidden
    }

    pub fn guide_text(&self) -> &str {
        &self.guide_text
    }

    pub(crate) fn set_state(&mut self, state: PaintingState) {
        self.state = state;
    }

    /// Updates the record for one effect. Host-facing work is done elsewhere.
    pub(crate) fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::SetTracking { quality } => self.tracking = *quality,
            Effect::SetAnchor { anchor } => self.anchor = Some(*anchor),
            Effect::ClearAnchor => self.anchor = None,
            Effect::AddNode { node } => {
                self.nodes.insert(node.kind, node.clone());
            }
            Effect::RemoveNode { kind } => {
                self.nodes.remove(kind);
            }
            Effect::SetNodesHidden { hidden } => self.nodes_hidden = *hidden,
            Effect::SetGuideText { text } => self.guide_text = text.clone(),
            Effect::ReportError { .. } => {}
        }
    }
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of a session for headless inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: PaintingState,
    pub tracking: TrackingQuality,
    pub anchor: Option<Pose>,
    pub nodes: Vec<NodeSpec>,
    pub nodes_hidden: bool,
    pub guide_text: String,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One placement session: the record, its config, and the effect interpreter.
#[derive(Debug, Clone, Default)]
pub struct Session {
    record: SessionRecord,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            record: SessionRecord::new(),
            config,
        }
    }

    pub fn record(&self) -> &SessionRecord {
        &self.record
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> PaintingState {
        self.record.state
    }

    pub fn tracking(&self) -> TrackingQuality {
        self.record.tracking
    }

    pub fn anchor(&self) -> Option<&Pose> {
        self.record.anchor.as_ref()
    }

    /// Shows the guide label and the baseboard indicator.
    pub fn start<H: SceneHost>(&mut self, host: &mut H) -> Transition {
        let transition = machine::initial(&self.config);
        self.apply(&transition, host);
        transition
    }

    /// Runs one event through the state machine and applies its effects.
    pub fn handle<H: SceneHost>(&mut self, event: &Event, host: &mut H) -> Transition {
        let transition = machine::transition(&self.record, &self.config, event);

        debug!(
            from = ?transition.from,
            to = ?transition.to,
            tracking = ?self.record.tracking,
            effects = transition.effects.len(),
            "placement transition"
        );
        if let Event::Tap(_) = event {
            if !self.record.tracking.is_normal() {
                warn!(
                    tracking = ?self.record.tracking,
                    "tap ignored while tracking is degraded, resetting"
                );
            }
        }
        if let Some(error) = transition.error() {
            warn!(code = error.code(), %error, "placement attempt abandoned, resetting");
        }

        self.apply(&transition, host);

        if transition.to == PaintingState::PlacementCommitted && transition.changed_state() {
            if let Some(node) = self.record.node(NodeKind::Painting) {
                let position = node.pose.position();
                info!(
                    x = position.x,
                    y = position.y,
                    z = position.z,
                    "painting committed"
                );
            }
        }

        transition
    }

    pub fn tap<H: SceneHost>(&mut self, input: TapInput, host: &mut H) -> Transition {
        self.handle(&Event::Tap(input), host)
    }

    pub fn set_tracking<H: SceneHost>(
        &mut self,
        quality: TrackingQuality,
        host: &mut H,
    ) -> Transition {
        self.handle(&Event::TrackingChanged { quality }, host)
    }

    /// Forces a reset to `NoAnchor`.
    pub fn reset<H: SceneHost>(&mut self, host: &mut H) -> Transition {
        let transition = machine::reset(&self.record, &self.config, None);
        self.apply(&transition, host);
        transition
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.record.state,
            tracking: self.record.tracking,
            anchor: self.record.anchor,
            nodes: self.record.nodes.values().cloned().collect(),
            nodes_hidden: self.record.nodes_hidden,
            guide_text: self.record.guide_text.clone(),
        }
    }

    fn apply<H: SceneHost>(&mut self, transition: &Transition, host: &mut H) {
        for effect in &transition.effects {
            match effect {
                Effect::SetAnchor { anchor } => {
                    if let Some(previous) = self.record.anchor {
                        host.unregister_anchor(&previous);
                    }
                    host.register_anchor(anchor);
                }
                Effect::ClearAnchor => {
                    if let Some(previous) = self.record.anchor {
                        host.unregister_anchor(&previous);
                    }
                }
                Effect::AddNode { node } => {
                    if self.record.has_node(node.kind) {
                        host.remove_node(node.kind);
                    }
                    host.add_node(node);
                }
                Effect::RemoveNode { kind } => host.remove_node(*kind),
                Effect::SetNodesHidden { hidden } => host.set_nodes_hidden(*hidden),
                Effect::SetGuideText { text } => {
                    host.set_guide_label(&GuideLabel::from_text(text))
                }
                Effect::ReportError { error } => host.report_error(*error),
                Effect::SetTracking { .. } => {}
            }
            self.record.apply(effect);
        }
        self.record.state = transition.to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::HeadlessScene;

    fn started() -> (Session, HeadlessScene) {
        let mut session = Session::default();
        let mut scene = HeadlessScene::new();
        session.start(&mut scene);
        (session, scene)
    }

    #[test]
    fn start_shows_indicator_and_recovery_text() {
        let (session, scene) = started();

        assert_eq!(session.state(), PaintingState::NoAnchor);
        assert!(scene.node(NodeKind::BaseboardIndicator).is_some());
        assert_eq!(
            scene.label().text,
            " Point towards the floow and move the phone "
        );
    }

    #[test]
    fn tracking_loss_hides_and_recovery_shows_nodes() {
        let (mut session, mut scene) = started();

        session.set_tracking(TrackingQuality::Normal, &mut scene);
        session.set_tracking(TrackingQuality::Limited, &mut scene);
        assert!(scene.nodes().all(|n| n.hidden));
        assert!(session.record().nodes_hidden());

        session.set_tracking(TrackingQuality::Normal, &mut scene);
        assert!(scene.nodes().all(|n| !n.hidden));
        assert_eq!(
            session.record().guide_text(),
            "Align the white line with the baseboard \n and tap the screen"
        );
    }

    #[test]
    fn snapshot_serializes_state() {
        let (session, _) = started();
        let json = session.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["state"], "no_anchor");
        assert_eq!(value["tracking"], "unavailable");
        assert_eq!(value["nodes"][0]["kind"], "baseboard_indicator");
    }

    #[test]
    fn explicit_reset_under_normal_tracking_keeps_single_indicator() {
        let (mut session, mut scene) = started();
        session.set_tracking(TrackingQuality::Normal, &mut scene);

        session.reset(&mut scene);
        session.reset(&mut scene);

        assert_eq!(scene.node_count(), 1);
        assert_eq!(session.state(), PaintingState::NoAnchor);
    }
}
