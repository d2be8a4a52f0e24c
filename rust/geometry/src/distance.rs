// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point distance helpers.

use nalgebra::Point3;

/// Euclidean distance between two points in meters.
///
/// Symmetric in its arguments and exactly zero for identical points.
#[inline]
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_matches_pythagoras() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 6.0, 3.0);
        assert_relative_eq!(distance(&a, &b), 5.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point3::new(-0.3, 1.45, 2.2);
        let b = Point3::new(0.7, -0.05, -1.9);
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = Point3::new(0.12, 1.6, -2.4);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn triangle_inequality_holds() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.5, -2.0),
            Point3::new(-3.0, 1.6, 0.25),
            Point3::new(0.0, 1.6, -2.0),
        ];

        for a in &points {
            for b in &points {
                for c in &points {
                    assert!(distance(a, c) <= distance(a, b) + distance(b, c) + 1e-12);
                }
            }
        }
    }
}
