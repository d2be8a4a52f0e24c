// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rigid poses for the camera and for tracked anchors.
//!
//! A [`Pose`] is an immutable snapshot of position plus orientation. Hosts
//! usually hand over 4x4 column-major transforms; [`Pose::from_matrix`]
//! validates that such a matrix is rigid before accepting it.

use nalgebra::{
    Isometry3, Matrix3, Matrix4, Point3, Quaternion, Rotation3, Translation3, UnitQuaternion,
    Vector3,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tolerance for the orthonormality and bottom-row checks on host matrices.
const RIGID_TOLERANCE: f64 = 1e-4;

/// Camera-style Euler angles in radians.
///
/// The rotation is composed as `Ry(yaw) * Rx(pitch) * Rz(roll)`. With the
/// camera looking down -Z, a positive pitch tilts the view upward and a
/// positive yaw turns it to the left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl EulerAngles {
    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn from_degrees(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self::new(pitch.to_radians(), yaw.to_radians(), roll.to_radians())
    }

    /// Builds the rotation described by these angles.
    pub fn to_rotation(&self) -> UnitQuaternion<f64> {
        let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw);
        let pitch = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.pitch);
        let roll = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.roll);
        yaw * pitch * roll
    }

    /// Recovers pitch, yaw and roll from a rotation.
    ///
    /// At pitch = ±90° yaw and roll are coupled; roll is reported as zero.
    pub fn from_rotation(rotation: &UnitQuaternion<f64>) -> Self {
        let rotation = rotation.to_rotation_matrix();
        let m = rotation.matrix();

        let sin_pitch = (-m[(1, 2)]).clamp(-1.0, 1.0);
        let pitch = sin_pitch.asin();

        if sin_pitch.abs() < 1.0 - 1e-12 {
            Self {
                pitch,
                yaw: m[(0, 2)].atan2(m[(2, 2)]),
                roll: m[(1, 0)].atan2(m[(1, 1)]),
            }
        } else {
            // Gimbal lock: fold everything into yaw
            Self {
                pitch,
                yaw: (-m[(2, 0)]).atan2(m[(0, 0)]),
                roll: 0.0,
            }
        }
    }
}

/// Position and orientation in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PoseSnapshot", into = "PoseSnapshot")]
pub struct Pose {
    isometry: Isometry3<f64>,
}

impl Pose {
    pub fn new(position: Point3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            isometry: Isometry3::from_parts(Translation3::from(position.coords), orientation),
        }
    }

    pub fn identity() -> Self {
        Self {
            isometry: Isometry3::identity(),
        }
    }

    /// A pose at the given position with identity orientation.
    pub fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z), UnitQuaternion::identity())
    }

    pub fn from_euler(position: Point3<f64>, angles: EulerAngles) -> Self {
        Self::new(position, angles.to_rotation())
    }

    /// Imports a host 4x4 transform.
    ///
    /// The matrix must be finite, have a `(0, 0, 0, 1)` bottom row and carry a
    /// proper rotation (orthonormal, determinant +1) in its upper-left block.
    pub fn from_matrix(matrix: &Matrix4<f64>) -> Result<Self> {
        if matrix.iter().any(|v| !v.is_finite()) {
            return Err(Error::NonFinite("transform matrix"));
        }

        let bottom = matrix.fixed_view::<1, 4>(3, 0);
        if (bottom[0].abs() + bottom[1].abs() + bottom[2].abs() + (bottom[3] - 1.0).abs())
            > RIGID_TOLERANCE
        {
            return Err(Error::invalid_transform(format!(
                "bottom row must be (0, 0, 0, 1), got ({}, {}, {}, {})",
                bottom[0], bottom[1], bottom[2], bottom[3]
            )));
        }

        let rotation: Matrix3<f64> = matrix.fixed_view::<3, 3>(0, 0).into_owned();
        let drift = (rotation.transpose() * rotation - Matrix3::identity()).amax();
        if drift > RIGID_TOLERANCE {
            return Err(Error::invalid_transform(format!(
                "rotation block is not orthonormal (drift {:.3e})",
                drift
            )));
        }
        if rotation.determinant() < 0.0 {
            return Err(Error::invalid_transform("rotation block is a reflection"));
        }

        let orientation =
            UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation));
        let position = Point3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);

        Ok(Self::new(position, orientation))
    }

    /// Homogeneous transform from local to world coordinates.
    pub fn to_matrix(&self) -> Matrix4<f64> {
        self.isometry.to_homogeneous()
    }

    pub fn isometry(&self) -> &Isometry3<f64> {
        &self.isometry
    }

    pub fn position(&self) -> Point3<f64> {
        Point3::from(self.isometry.translation.vector)
    }

    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.isometry.rotation
    }

    /// Vertical (world Y) coordinate.
    pub fn height(&self) -> f64 {
        self.isometry.translation.vector.y
    }

    pub fn euler_angles(&self) -> EulerAngles {
        EulerAngles::from_rotation(&self.isometry.rotation)
    }

    /// Direction the local -Z axis points to in world space.
    pub fn forward(&self) -> Vector3<f64> {
        self.isometry.rotation * -Vector3::<f64>::z()
    }

    /// Same pose with the vertical coordinate replaced.
    pub fn with_height(&self, y: f64) -> Self {
        let mut isometry = self.isometry;
        isometry.translation.vector.y = y;
        Self { isometry }
    }

    /// Applies `rotation` in the pose's local frame (post-multiplication).
    pub fn rotated_local(&self, rotation: &UnitQuaternion<f64>) -> Self {
        Self {
            isometry: Isometry3::from_parts(
                self.isometry.translation,
                self.isometry.rotation * rotation,
            ),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Serializable form of a [`Pose`]: position plus an `[i, j, k, w]` quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseSnapshot {
    pub position: [f64; 3],
    pub orientation: [f64; 4],
}

impl From<Pose> for PoseSnapshot {
    fn from(pose: Pose) -> Self {
        let p = pose.position();
        let q = pose.orientation();
        Self {
            position: [p.x, p.y, p.z],
            orientation: [q.i, q.j, q.k, q.w],
        }
    }
}

impl TryFrom<PoseSnapshot> for Pose {
    type Error = Error;

    fn try_from(snapshot: PoseSnapshot) -> Result<Self> {
        if snapshot.position.iter().any(|v| !v.is_finite()) {
            return Err(Error::NonFinite("pose position"));
        }
        if snapshot.orientation.iter().any(|v| !v.is_finite()) {
            return Err(Error::NonFinite("pose orientation"));
        }

        let [i, j, k, w] = snapshot.orientation;
        let orientation = UnitQuaternion::try_new(Quaternion::new(w, i, j, k), 1e-9)
            .ok_or_else(|| Error::invalid_transform("orientation quaternion has zero length"))?;
        let [x, y, z] = snapshot.position;

        Ok(Pose::new(Point3::new(x, y, z), orientation))
    }
}
