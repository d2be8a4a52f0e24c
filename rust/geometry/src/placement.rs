// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall placement geometry.
//!
//! The user marks the baseboard by tapping on the floor right where it meets
//! the wall. That floor anchor fixes the wall's horizontal position and the
//! painting's facing; the camera's height and tilt then decide how high on the
//! wall the painting ends up.

use nalgebra::{UnitQuaternion, Vector3};

use crate::distance::distance;
use crate::pose::Pose;

/// Turns a floor hit-test result into the baseboard anchor.
///
/// The hit transform is rotated about its vertical axis by the camera's yaw so
/// the anchor faces the way the user is looking, whatever orientation the
/// detected plane reported. Hits on horizontal planes have their local up axis
/// aligned with world up, so this is a rotation about world vertical.
pub fn compute_floor_anchor(hit: &Pose, camera_yaw: f64) -> Pose {
    let rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), camera_yaw);
    hit.rotated_local(&rotation)
}

/// Computes the final painting transform on the wall.
///
/// The painting keeps the floor anchor's plan position and orientation. Its
/// height is where the camera's view ray meets the wall: starting level with
/// the camera, it rises by `distance * tan(pitch)` as the phone tilts up.
///
/// No clamping is applied; a pitch close to ±90° sends the height to infinity.
pub fn compute_wall_placement(floor_anchor: &Pose, camera: &Pose) -> Pose {
    // y-axis distance between camera and floor
    let camera_height = camera.height() - floor_anchor.height();

    let candidate = floor_anchor.with_height(camera.height());
    let distance_from_wall = distance(&camera.position(), &candidate.position());

    let pitch = camera.euler_angles().pitch;
    let height_from_floor = camera_height + distance_from_wall * pitch.tan();

    floor_anchor.with_height(floor_anchor.height() + height_from_floor)
}

/// Forward distance at which the adjuster preview floats in front of the camera.
///
/// This is the distance from the camera to the anchor lifted to camera height,
/// so the vertical offset between camera and floor does not contribute.
pub fn compute_adjuster_offset(camera: &Pose, floor_anchor: &Pose) -> f64 {
    let helper = floor_anchor.with_height(camera.height());
    distance(&camera.position(), &helper.position())
}
