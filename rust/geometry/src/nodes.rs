// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Render-node descriptions handed to the host.
//!
//! A [`NodeSpec`] says what to draw and where, without touching any scene
//! graph. The [`Attachment`] tag carries the parenting model explicitly:
//! camera-attached nodes are positioned relative to the camera and follow it,
//! world-attached nodes are positioned relative to the world origin.

use nalgebra::{Point3, UnitQuaternion};
use serde::{Deserialize, Serialize};

use crate::placement::{compute_adjuster_offset, compute_wall_placement};
use crate::pose::Pose;

/// What a node's pose is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attachment {
    Camera,
    World,
}

/// The three nodes the placement workflow ever shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// White guide line the user aligns with the baseboard.
    BaseboardIndicator,
    /// Semi-transparent painting preview floating in front of the camera.
    Adjuster,
    /// The committed painting on the wall.
    Painting,
}

/// Painting size in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintingDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl PaintingDimensions {
    pub const STANDARD: PaintingDimensions = PaintingDimensions {
        width: 0.53,
        height: 0.77,
        depth: 0.03,
    };
}

impl Default for PaintingDimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Primitive geometry for a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Box {
        width: f64,
        height: f64,
        length: f64,
        chamfer_radius: f64,
    },
    Plane {
        width: f64,
        height: f64,
        corner_radius: f64,
    },
}

impl Shape {
    pub fn painting(dimensions: PaintingDimensions) -> Self {
        Shape::Box {
            width: dimensions.width,
            height: dimensions.height,
            length: dimensions.depth,
            chamfer_radius: 0.0,
        }
    }
}

/// Surface appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Surface {
    /// Artwork on the front face, a flat color on the remaining five faces.
    Framed { artwork: String, frame_rgba: [f32; 4] },
    Solid { rgba: [f32; 4] },
}

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const FRAME_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 0.8];

/// Tunable appearance of the placement nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
    /// How far in front of the camera the baseboard indicator sits.
    pub indicator_distance: f64,
    pub indicator_width: f64,
    pub indicator_height: f64,
    pub indicator_corner_radius: f64,
    pub adjuster_opacity: f32,
    pub painting_opacity: f32,
    pub artwork: String,
    pub dimensions: PaintingDimensions,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            indicator_distance: 0.2,
            indicator_width: 0.1,
            indicator_height: 0.002,
            indicator_corner_radius: 2.0,
            adjuster_opacity: 0.5,
            painting_opacity: 1.0,
            artwork: "art.scnassets/Mona_Lisa-restored.jpg".into(),
            dimensions: PaintingDimensions::STANDARD,
        }
    }
}

/// Everything the host needs to instantiate one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub kind: NodeKind,
    pub attachment: Attachment,
    pub pose: Pose,
    pub shape: Shape,
    pub surface: Surface,
    pub opacity: f32,
}

impl NodeSpec {
    pub fn is_camera_attached(&self) -> bool {
        self.attachment == Attachment::Camera
    }
}

/// Guide line shown 20 cm in front of the camera before an anchor exists.
pub fn baseboard_indicator(style: &NodeStyle) -> NodeSpec {
    NodeSpec {
        kind: NodeKind::BaseboardIndicator,
        attachment: Attachment::Camera,
        pose: Pose::from_translation(0.0, 0.0, -style.indicator_distance),
        shape: Shape::Plane {
            width: style.indicator_width,
            height: style.indicator_height,
            corner_radius: style.indicator_corner_radius,
        },
        surface: Surface::Solid { rgba: WHITE },
        opacity: 1.0,
    }
}

/// Painting preview parented to the camera at the wall's horizontal distance.
pub fn adjuster_preview(camera: &Pose, floor_anchor: &Pose, style: &NodeStyle) -> NodeSpec {
    let offset = compute_adjuster_offset(camera, floor_anchor);

    NodeSpec {
        kind: NodeKind::Adjuster,
        attachment: Attachment::Camera,
        pose: Pose::new(Point3::new(0.0, 0.0, -offset), UnitQuaternion::identity()),
        shape: Shape::painting(style.dimensions),
        surface: framed(style),
        opacity: style.adjuster_opacity,
    }
}

/// Final painting locked into world space.
pub fn painting(floor_anchor: &Pose, camera: &Pose, style: &NodeStyle) -> NodeSpec {
    NodeSpec {
        kind: NodeKind::Painting,
        attachment: Attachment::World,
        pose: compute_wall_placement(floor_anchor, camera),
        shape: Shape::painting(style.dimensions),
        surface: framed(style),
        opacity: style.painting_opacity,
    }
}

fn framed(style: &NodeStyle) -> Surface {
    Surface::Framed {
        artwork: style.artwork.clone(),
        frame_rgba: FRAME_WHITE,
    }
}
