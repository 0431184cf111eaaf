//! Replays recorded pinch gestures through a [`PinchScale`].

use serde::{Serialize, Serializer};
use std::cell::RefCell;
use std::rc::Rc;
use tint_core::{GesturePhase, PinchScale, ScaleBounds, ScaleStorage, SharedScale};

use crate::models::{GestureEvent, GestureScript};

/// State after a single event has been applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReplayFrame {
    pub event: GestureEvent,
    #[serde(serialize_with = "serialize_phase")]
    pub phase: GesturePhase,
    pub effective: f64,
    pub persisted: f64,
}

fn serialize_phase<S: Serializer>(phase: &GesturePhase, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(match phase {
        GesturePhase::Idle => "idle",
        GesturePhase::Scaling => "scaling",
    })
}

/// Everything observed while replaying a script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub frames: Vec<ReplayFrame>,
    /// Values delivered to the scale-changed observer
    pub changed: Vec<f64>,
    /// Values delivered to the gesture-ended observer
    pub ended: Vec<f64>,
    /// Persisted scale after the last event
    pub final_scale: f64,
}

/// Drives a [`PinchScale`] with a [`GestureScript`]
#[derive(Debug, Clone, Copy)]
pub struct GestureReplay {
    bounds: ScaleBounds,
}

impl GestureReplay {
    pub fn new(bounds: ScaleBounds) -> Self {
        Self { bounds }
    }

    /// Replay with a self-contained scale starting at 1.0
    pub fn run(&self, script: &GestureScript) -> ReplayReport {
        self.drive(script, PinchScale::new)
    }

    /// Replay against caller-owned storage, which keeps the final value
    pub fn run_bound(&self, script: &GestureScript, storage: SharedScale) -> ReplayReport {
        self.drive(script, |bounds| PinchScale::bound(storage, bounds))
    }

    fn drive<S, F>(&self, script: &GestureScript, build: F) -> ReplayReport
    where
        S: ScaleStorage,
        F: FnOnce(ScaleBounds) -> PinchScale<S>,
    {
        let changed = Rc::new(RefCell::new(Vec::new()));
        let ended = Rc::new(RefCell::new(Vec::new()));

        let mut zoom = build(self.bounds)
            .on_changed({
                let changed = changed.clone();
                move |scale| changed.borrow_mut().push(scale)
            })
            .on_ended({
                let ended = ended.clone();
                move |scale| ended.borrow_mut().push(scale)
            });

        let mut frames = Vec::with_capacity(script.events.len());
        for &event in &script.events {
            match event {
                GestureEvent::Update(factor) => {
                    zoom.update(factor);
                }
                GestureEvent::End(factor) => {
                    zoom.end(factor);
                }
                GestureEvent::Reset => zoom.reset(),
            }

            let frame = ReplayFrame {
                event,
                phase: zoom.phase(),
                effective: zoom.effective_scale(),
                persisted: zoom.persisted_scale(),
            };
            tracing::debug!(
                ?event,
                phase = ?frame.phase,
                effective = frame.effective,
                persisted = frame.persisted,
                "Gesture event replayed"
            );
            frames.push(frame);
        }

        let final_scale = zoom.persisted_scale();
        drop(zoom);

        ReplayReport {
            frames,
            changed: changed.take(),
            ended: ended.take(),
            final_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(events: Vec<GestureEvent>) -> GestureScript {
        GestureScript { events }
    }

    #[test]
    fn test_replay_clamps_to_bounds() {
        let replay = GestureReplay::new(ScaleBounds::new(1.0, 4.0).unwrap());
        let report = replay.run(&script(vec![
            GestureEvent::Update(1.0),
            GestureEvent::Update(2.0),
            GestureEvent::Update(5.0),
            GestureEvent::End(5.0),
        ]));

        assert_eq!(report.changed, vec![1.0, 2.0, 4.0]);
        assert_eq!(report.ended, vec![4.0]);
        assert_eq!(report.final_scale, 4.0);
        assert_eq!(report.frames[2].phase, GesturePhase::Scaling);
        assert_eq!(report.frames[3].phase, GesturePhase::Idle);
    }

    #[test]
    fn test_reset_frame() {
        let replay = GestureReplay::new(ScaleBounds::default());
        let report = replay.run(&script(vec![
            GestureEvent::End(3.0),
            GestureEvent::Reset,
        ]));

        assert_eq!(report.frames[0].persisted, 3.0);
        assert_eq!(report.frames[1].persisted, 1.0);
        assert_eq!(report.final_scale, 1.0);
        assert!(report.changed.is_empty());
    }

    #[test]
    fn test_bound_mode_writes_through() {
        let storage = SharedScale::new(2.0);
        let replay = GestureReplay::new(ScaleBounds::default());
        let report = replay.run_bound(
            &script(vec![GestureEvent::Update(1.5), GestureEvent::End(1.5)]),
            storage.clone(),
        );

        assert_eq!(report.frames[0].effective, 3.0);
        assert_eq!(storage.get(), 3.0);
    }

    #[test]
    fn test_frame_serializes_phase_label() {
        let frame = ReplayFrame {
            event: GestureEvent::Reset,
            phase: GesturePhase::Idle,
            effective: 1.0,
            persisted: 1.0,
        };
        let json = serde_json::to_value(frame).unwrap();
        assert_eq!(json["phase"], "idle");
        assert_eq!(json["event"], "reset");
    }
}
