// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-side interpreter seam.
//!
//! A rendering host implements [`SceneHost`] to turn effects into scene-graph
//! and tracking-session calls. [`HeadlessScene`] is an in-memory host for
//! tests and replays that records what would have been drawn.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wallhang_geometry::{NodeKind, NodeSpec, Pose};

use crate::error::PlacementError;
use crate::guide::GuideLabel;

/// Scene and tracking-session operations the workflow needs from its host.
pub trait SceneHost {
    /// Parent `node` to the camera or the world root according to its attachment.
    fn add_node(&mut self, node: &NodeSpec);

    fn remove_node(&mut self, kind: NodeKind);

    fn set_nodes_hidden(&mut self, hidden: bool);

    fn register_anchor(&mut self, anchor: &Pose);

    fn unregister_anchor(&mut self, anchor: &Pose);

    fn set_guide_label(&mut self, label: &GuideLabel);

    fn report_error(&mut self, _error: PlacementError) {}
}

/// A node as the headless scene holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlessNode {
    pub spec: NodeSpec,
    pub hidden: bool,
}

/// Render-graph stand-in that keeps everything in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadlessScene {
    nodes: BTreeMap<NodeKind, HeadlessNode>,
    anchors: Vec<Pose>,
    label: GuideLabel,
    errors: Vec<PlacementError>,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, kind: NodeKind) -> Option<&HeadlessNode> {
        self.nodes.get(&kind)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &HeadlessNode> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anchors currently registered with the (simulated) tracking session.
    pub fn anchors(&self) -> &[Pose] {
        &self.anchors
    }

    pub fn label(&self) -> &GuideLabel {
        &self.label
    }

    pub fn errors(&self) -> &[PlacementError] {
        &self.errors
    }
}

impl SceneHost for HeadlessScene {
    fn add_node(&mut self, node: &NodeSpec) {
        self.nodes.insert(
            node.kind,
            HeadlessNode {
                spec: node.clone(),
                hidden: false,
            },
        );
    }

    fn remove_node(&mut self, kind: NodeKind) {
        self.nodes.remove(&kind);
    }

    fn set_nodes_hidden(&mut self, hidden: bool) {
        for node in self.nodes.values_mut() {
            node.hidden = hidden;
        }
    }

    fn register_anchor(&mut self, anchor: &Pose) {
        self.anchors.push(*anchor);
    }

    fn unregister_anchor(&mut self, anchor: &Pose) {
        self.anchors.retain(|a| a != anchor);
    }

    fn set_guide_label(&mut self, label: &GuideLabel) {
        self.label = label.clone();
    }

    fn report_error(&mut self, error: PlacementError) {
        self.errors.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallhang_geometry::{baseboard_indicator, NodeStyle};

    #[test]
    fn adding_same_kind_replaces_node() {
        let mut scene = HeadlessScene::new();
        let node = baseboard_indicator(&NodeStyle::default());

        scene.add_node(&node);
        scene.add_node(&node);

        assert_eq!(scene.node_count(), 1);
    }

    #[test]
    fn hiding_applies_to_every_node() {
        let mut scene = HeadlessScene::new();
        scene.add_node(&baseboard_indicator(&NodeStyle::default()));

        scene.set_nodes_hidden(true);

        assert!(scene.nodes().all(|n| n.hidden));
    }

    #[test]
    fn unregister_removes_only_matching_anchor() {
        let mut scene = HeadlessScene::new();
        let a = Pose::from_translation(0.0, 0.0, -1.0);
        let b = Pose::from_translation(1.0, 0.0, -1.0);

        scene.register_anchor(&a);
        scene.register_anchor(&b);
        scene.unregister_anchor(&a);

        assert_eq!(scene.anchors(), &[b]);
    }
}
