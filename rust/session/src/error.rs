// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement errors.
//!
//! None of these abort the process. Each one aborts the current placement
//! attempt and sends the session back to `NoAnchor`; the user re-taps.

use serde::{Deserialize, Serialize};

/// Result type alias for placement steps.
pub type Result<T> = std::result::Result<T, PlacementError>;

/// Why a placement attempt was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacementError {
    /// The floor hit-test returned nothing.
    #[error("no floor plane found at the tap point")]
    NoHitFound,

    /// The tracking session had no current camera pose.
    #[error("camera pose unavailable")]
    MissingCameraPose,

    /// Commit attempted without a stored floor anchor.
    #[error("no floor anchor to place the painting from")]
    MissingAnchor,
}

impl PlacementError {
    /// Stable code for logs and reports.
    pub fn code(&self) -> &'static str {
        match self {
            PlacementError::NoHitFound => "NO_HIT_FOUND",
            PlacementError::MissingCameraPose => "MISSING_CAMERA_POSE",
            PlacementError::MissingAnchor => "MISSING_ANCHOR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_serialized_names() {
        for err in [
            PlacementError::NoHitFound,
            PlacementError::MissingCameraPose,
            PlacementError::MissingAnchor,
        ] {
            let json = serde_json::to_string(&err).unwrap();
            assert_eq!(json, format!("\"{}\"", err.code()));
        }
    }
}
