// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Recorded tracking traces.
//!
//! A trace is a JSON object with an `events` array. Poses may be written as a
//! position plus `[i, j, k, w]` quaternion, as a position plus Euler angles in
//! degrees, or as a column-major 4x4 matrix the way tracking hosts expose them.

use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::{Matrix4, Point3};
use serde::{Deserialize, Serialize};
use wallhang_geometry::{EulerAngles, Pose, PoseSnapshot};
use wallhang_session::{Event, TapInput, TrackingQuality};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    pub events: Vec<TraceEvent>,
}

impl Trace {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("malformed trace")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read trace '{}'", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in trace '{}'", path.display()))
    }

    /// Converts every recorded event into a session event.
    pub fn to_events(&self) -> Result<Vec<Event>> {
        self.events
            .iter()
            .enumerate()
            .map(|(i, event)| event.to_event().with_context(|| format!("event #{}", i)))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    Tracking {
        quality: TrackingQuality,
    },
    Tap {
        #[serde(default)]
        camera: Option<TracePose>,
        #[serde(default)]
        hit: Option<TracePose>,
    },
}

impl TraceEvent {
    pub fn to_event(&self) -> Result<Event> {
        match self {
            TraceEvent::Tracking { quality } => Ok(Event::TrackingChanged { quality: *quality }),
            TraceEvent::Tap { camera, hit } => {
                let camera = camera
                    .as_ref()
                    .map(|p| p.to_pose().context("camera pose"))
                    .transpose()?;
                let hit = hit
                    .as_ref()
                    .map(|p| p.to_pose().context("hit pose"))
                    .transpose()?;
                Ok(Event::Tap(TapInput::new(camera, hit)))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TracePose {
    Quaternion(PoseSnapshot),
    Euler {
        position: [f64; 3],
        euler_degrees: EulerAngles,
    },
    Matrix {
        matrix: [f64; 16],
    },
}

impl TracePose {
    pub fn to_pose(&self) -> wallhang_geometry::Result<Pose> {
        match self {
            TracePose::Quaternion(snapshot) => Pose::try_from(*snapshot),
            TracePose::Euler {
                position,
                euler_degrees,
            } => {
                let [x, y, z] = *position;
                let angles = EulerAngles::from_degrees(
                    euler_degrees.pitch,
                    euler_degrees.yaw,
                    euler_degrees.roll,
                );
                Ok(Pose::from_euler(Point3::new(x, y, z), angles))
            }
            TracePose::Matrix { matrix } => Pose::from_matrix(&Matrix4::from_column_slice(matrix)),
        }
    }
}
