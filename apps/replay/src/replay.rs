// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Runs a trace through a session backed by a headless scene.

use anyhow::Result;
use serde::Serialize;
use wallhang_session::{
    Effect, Event, HeadlessScene, PaintingState, PlacementError, Session, SessionConfig,
    SessionSnapshot, Transition,
};

use crate::trace::Trace;

/// What happened at one step of the replay.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub event: &'static str,
    pub from: PaintingState,
    pub to: PaintingState,
    pub guide_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PlacementError>,
    pub effects: Vec<Effect>,
}

impl StepReport {
    fn new(index: usize, event: &'static str, transition: Transition, session: &Session) -> Self {
        Self {
            index,
            event,
            from: transition.from,
            to: transition.to,
            guide_text: session.record().guide_text().to_string(),
            error: transition.error(),
            effects: transition.effects,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<StepReport>,
    pub session: SessionSnapshot,
    pub scene: HeadlessScene,
}

impl ReplayReport {
    pub fn error_count(&self) -> usize {
        self.steps.iter().filter(|s| s.error.is_some()).count()
    }
}

/// Replays `trace` from a freshly started session.
pub fn replay(trace: &Trace, config: SessionConfig) -> Result<ReplayReport> {
    let events = trace.to_events()?;

    let mut session = Session::new(config);
    let mut scene = HeadlessScene::new();
    let mut steps = Vec::with_capacity(events.len() + 1);

    let started = session.start(&mut scene);
    steps.push(StepReport::new(0, "start", started, &session));

    for (i, event) in events.iter().enumerate() {
        let transition = session.handle(event, &mut scene);
        let name = match event {
            Event::TrackingChanged { .. } => "tracking",
            Event::Tap(_) => "tap",
        };
        steps.push(StepReport::new(i + 1, name, transition, &session));
    }

    Ok(ReplayReport {
        steps,
        session: session.snapshot(),
        scene,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wallhang_geometry::NodeKind;

    const HANG_TRACE: &str = r#"{"events":[
        {"type":"tracking","quality":"normal"},
        {"type":"tap",
         "camera":{"position":[0.0,1.6,0.0],"orientation":[0.0,0.0,0.0,1.0]},
         "hit":{"position":[0.0,0.0,-2.0],"orientation":[0.0,0.0,0.0,1.0]}},
        {"type":"tap",
         "camera":{"position":[0.0,1.6,0.0],"orientation":[0.0,0.0,0.0,1.0]}}
    ]}"#;

    #[test]
    fn replay_commits_painting_at_camera_height() {
        let trace = Trace::from_json(HANG_TRACE).unwrap();
        let report = replay(&trace, SessionConfig::default()).unwrap();

        assert_eq!(report.steps.len(), 4);
        assert_eq!(report.session.state, PaintingState::PlacementCommitted);
        assert_eq!(report.error_count(), 0);
        let painting = report.scene.node(NodeKind::Painting).unwrap();
        assert_relative_eq!(painting.spec.pose.height(), 1.6, epsilon = 1e-12);
        assert_eq!(
            report.steps[3].guide_text,
            "Remove the painting by tapping the screen"
        );
    }

    #[test]
    fn replay_records_reset_errors() {
        let trace = Trace::from_json(
            r#"{"events":[
                {"type":"tracking","quality":"normal"},
                {"type":"tap","camera":{"position":[0.0,1.6,0.0],"orientation":[0.0,0.0,0.0,1.0]}}
            ]}"#,
        )
        .unwrap();
        let report = replay(&trace, SessionConfig::default()).unwrap();

        assert_eq!(report.error_count(), 1);
        assert_eq!(report.steps[2].error, Some(PlacementError::NoHitFound));
        assert_eq!(report.session.state, PaintingState::NoAnchor);
    }

    #[test]
    fn report_serializes() {
        let trace = Trace::from_json(HANG_TRACE).unwrap();
        let report = replay(&trace, SessionConfig::default()).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["steps"][0]["event"], "start");
        assert_eq!(value["session"]["state"], "placement_committed");
    }
}
