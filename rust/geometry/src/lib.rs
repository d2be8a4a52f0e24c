// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wallhang Geometry
//!
//! Pure placement math for hanging a virtual painting on a wall: the floor
//! anchor marking the baseboard, the camera-attached adjuster preview and the
//! final world-attached painting transform. Every function here is a
//! deterministic function of its arguments and never holds on to its inputs.
//!
//! Coordinates follow the tracking camera convention: Y is up and the camera
//! looks down its local -Z axis.

pub mod distance;
pub mod error;
pub mod nodes;
pub mod placement;
pub mod pose;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};

pub use distance::distance;
pub use error::{Error, Result};
pub use nodes::{
    adjuster_preview, baseboard_indicator, painting, Attachment, NodeKind, NodeSpec, NodeStyle,
    PaintingDimensions, Shape, Surface,
};
pub use placement::{compute_adjuster_offset, compute_floor_anchor, compute_wall_placement};
pub use pose::{EulerAngles, Pose, PoseSnapshot};
