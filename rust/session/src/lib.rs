// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Wallhang Session
//!
//! Tap-driven placement workflow for hanging a virtual painting on a wall.
//!
//! The workflow is a three-state cycle (`NoAnchor → AnchorSet →
//! PlacementCommitted → NoAnchor`) gated on tracking quality. Decision logic
//! lives in [`machine::transition`], a pure function from the current session
//! record and an input event to the next state plus a list of [`Effect`]s.
//! [`Session`] owns the record and interprets those effects, forwarding scene
//! mutations to a [`SceneHost`] implementation.

pub mod config;
pub mod effect;
pub mod error;
pub mod guide;
pub mod machine;
pub mod scene;
pub mod session;
pub mod state;

pub use config::SessionConfig;
pub use effect::Effect;
pub use error::{PlacementError, Result};
pub use guide::{guide_text, GuideLabel};
pub use machine::{transition, Event, TapInput, Transition};
pub use scene::{HeadlessNode, HeadlessScene, SceneHost};
pub use session::{Session, SessionRecord, SessionSnapshot};
pub use state::{PaintingState, TrackingQuality};
