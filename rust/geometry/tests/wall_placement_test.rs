// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end placement scenarios starting from host-style 4x4 transforms.

use approx::assert_relative_eq;
use wallhang_geometry::{
    compute_adjuster_offset, compute_floor_anchor, compute_wall_placement, painting, EulerAngles,
    Matrix4, NodeStyle, Point3, Pose,
};

/// Horizontal-plane hit 2 m in front of the origin, as a tracking host reports it.
fn floor_hit_matrix() -> Matrix4<f64> {
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, -2.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

fn camera(pitch: f64, yaw: f64) -> Pose {
    Pose::from_euler(Point3::new(0.0, 1.6, 0.0), EulerAngles::new(pitch, yaw, 0.0))
}

#[test]
fn baseboard_to_wall_with_level_camera() {
    let hit = Pose::from_matrix(&floor_hit_matrix()).unwrap();
    let cam = camera(0.0, 0.0);

    let anchor = compute_floor_anchor(&hit, cam.euler_angles().yaw);
    let placement = compute_wall_placement(&anchor, &cam);

    assert_eq!(placement.height(), 1.6);
    assert_eq!(placement.position().z, -2.0);
}

#[test]
fn baseboard_to_wall_with_tilted_camera() {
    let hit = Pose::from_matrix(&floor_hit_matrix()).unwrap();
    let cam = camera(0.1_f64.atan(), 0.0);

    let anchor = compute_floor_anchor(&hit, cam.euler_angles().yaw);
    let placement = compute_wall_placement(&anchor, &cam);

    assert_relative_eq!(placement.height(), 1.8, epsilon = 1e-9);
}

#[test]
fn anchor_yaw_follows_camera_but_height_math_does_not() {
    let hit = Pose::from_matrix(&floor_hit_matrix()).unwrap();
    let cam = camera(0.0, 0.35);

    let anchor = compute_floor_anchor(&hit, cam.euler_angles().yaw);
    let placement = compute_wall_placement(&anchor, &cam);

    assert_relative_eq!(anchor.euler_angles().yaw, 0.35, epsilon = 1e-12);
    assert_relative_eq!(placement.euler_angles().yaw, 0.35, epsilon = 1e-12);
    assert_relative_eq!(placement.height(), 1.6, epsilon = 1e-12);
}

#[test]
fn preview_distance_matches_committed_wall_distance() {
    let hit = Pose::from_matrix(&floor_hit_matrix()).unwrap();
    let cam = camera(0.2, 0.0);
    let anchor = compute_floor_anchor(&hit, 0.0);

    let offset = compute_adjuster_offset(&cam, &anchor);
    let node = painting(&anchor, &cam, &NodeStyle::default());

    assert_relative_eq!(offset, 2.0, epsilon = 1e-12);
    assert_relative_eq!(node.pose.height(), 1.6 + 2.0 * 0.2_f64.tan(), epsilon = 1e-9);
}

#[test]
fn steep_pitch_is_not_clamped() {
    let anchor = Pose::from_translation(0.0, 0.0, -2.0);
    let cam = camera(1.5, 0.0);

    let placement = compute_wall_placement(&anchor, &cam);

    assert!(placement.height() > 20.0);
}
