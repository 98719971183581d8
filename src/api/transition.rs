//! Clock-driven attribute transitions.
//!
//! Each animated attribute owns at most one running transition. Starting a
//! new one cancels the previous transition and continues from the values it
//! was displaying at that instant, so rapid clicks never leave two
//! animations racing on the same attribute.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimatedAttribute {
    XAxisDomain,
    YAxisDomain,
    PointsX,
    PointsY,
}

impl AnimatedAttribute {
    #[must_use]
    pub const fn axis_domain(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::XAxisDomain,
            Axis::Y => Self::YAxisDomain,
        }
    }

    #[must_use]
    pub const fn points(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::PointsX,
            Axis::Y => Self::PointsY,
        }
    }
}

/// Identifies one started transition; stale once superseded or finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionHandle {
    pub attribute: AnimatedAttribute,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
struct RunningTransition {
    from: Vec<f64>,
    start_ms: f64,
    duration_ms: f64,
    generation: u64,
}

impl RunningTransition {
    fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    fn is_finished(&self, now_ms: f64) -> bool {
        now_ms >= self.start_ms + self.duration_ms
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
struct AttributeSlot {
    target: Vec<f64>,
    running: Option<RunningTransition>,
}

impl AttributeSlot {
    fn sample(&self, now_ms: f64) -> Vec<f64> {
        let Some(running) = self.running.as_ref().filter(|r| !r.is_finished(now_ms)) else {
            return self.target.clone();
        };
        let eased = ease_cubic_in_out(running.progress(now_ms));
        running
            .from
            .iter()
            .zip(&self.target)
            .map(|(from, to)| from + (to - from) * eased)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionScheduler {
    slots: IndexMap<AnimatedAttribute, AttributeSlot>,
    next_generation: u64,
}

impl TransitionScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets values without animation, cancelling any running transition.
    pub fn set_immediate(&mut self, attribute: AnimatedAttribute, values: Vec<f64>) {
        let slot = self.slots.entry(attribute).or_default();
        slot.target = values;
        slot.running = None;
    }

    /// Starts animating `attribute` towards `target`.
    ///
    /// A running transition on the same attribute is cancelled; the new one
    /// starts from the values displayed at `now_ms`. Zero (or negative)
    /// durations apply the target immediately.
    pub fn start(
        &mut self,
        attribute: AnimatedAttribute,
        target: Vec<f64>,
        now_ms: f64,
        duration_ms: f64,
    ) -> TransitionHandle {
        self.next_generation += 1;
        let generation = self.next_generation;
        let slot = self.slots.entry(attribute).or_default();

        let from = slot.sample(now_ms);
        if let Some(previous) = &slot.running {
            if !previous.is_finished(now_ms) {
                trace!(
                    ?attribute,
                    superseded = previous.generation,
                    generation,
                    "transition superseded"
                );
            }
        }

        let animate = duration_ms.is_finite()
            && duration_ms > 0.0
            && from.len() == target.len()
            && from != target;
        slot.running = animate.then_some(RunningTransition {
            from,
            start_ms: now_ms,
            duration_ms,
            generation,
        });
        slot.target = target;

        TransitionHandle {
            attribute,
            generation,
        }
    }

    /// Values displayed for `attribute` at `now_ms`.
    #[must_use]
    pub fn sample(&self, attribute: AnimatedAttribute, now_ms: f64) -> Vec<f64> {
        self.slots
            .get(&attribute)
            .map(|slot| slot.sample(now_ms))
            .unwrap_or_default()
    }

    /// Final values `attribute` is heading to.
    #[must_use]
    pub fn target(&self, attribute: AnimatedAttribute) -> Option<&[f64]> {
        self.slots.get(&attribute).map(|slot| slot.target.as_slice())
    }

    #[must_use]
    pub fn is_running(&self, attribute: AnimatedAttribute, now_ms: f64) -> bool {
        self.slots
            .get(&attribute)
            .and_then(|slot| slot.running.as_ref())
            .is_some_and(|running| !running.is_finished(now_ms))
    }

    #[must_use]
    pub fn has_running(&self, now_ms: f64) -> bool {
        self.slots
            .values()
            .filter_map(|slot| slot.running.as_ref())
            .any(|running| !running.is_finished(now_ms))
    }

    /// `true` while the transition behind `handle` is still animating.
    #[must_use]
    pub fn is_live(&self, handle: TransitionHandle, now_ms: f64) -> bool {
        self.slots
            .get(&handle.attribute)
            .and_then(|slot| slot.running.as_ref())
            .is_some_and(|running| {
                running.generation == handle.generation && !running.is_finished(now_ms)
            })
    }

    /// Drops finished transitions so later samples read targets directly.
    pub fn retire_finished(&mut self, now_ms: f64) -> usize {
        let mut retired = 0;
        for slot in self.slots.values_mut() {
            if slot
                .running
                .as_ref()
                .is_some_and(|running| running.is_finished(now_ms))
            {
                slot.running = None;
                retired += 1;
            }
        }
        retired
    }
}

/// Cubic ease-in-out over `t ∈ [0, 1]`.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
    }

    #[test]
    fn retire_finished_clears_completed_transitions() {
        let mut scheduler = TransitionScheduler::new();
        scheduler.set_immediate(AnimatedAttribute::PointsX, vec![0.0]);
        scheduler.start(AnimatedAttribute::PointsX, vec![10.0], 0.0, 100.0);
        assert_eq!(scheduler.retire_finished(50.0), 0);
        assert_eq!(scheduler.retire_finished(100.0), 1);
        assert_eq!(scheduler.sample(AnimatedAttribute::PointsX, 100.0), vec![10.0]);
    }
}
