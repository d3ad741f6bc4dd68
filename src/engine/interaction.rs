//! Pointer gesture state machine for moving and resizing shift bars.
//!
//! A gesture starts with [`TimelineEditor::pointer_down`], which captures a
//! snapshot of the grabbed shift and the pointer x. Every
//! [`TimelineEditor::pointer_move`] derives a candidate interval from that
//! snapshot (never from the previous tick), validates it, and writes it back
//! through the [`ShiftStore`] if it passes. [`TimelineEditor::pointer_up`] and
//! [`TimelineEditor::pointer_leave`] return the machine to idle.
//!
//! # Invariants
//!
//! 1. At most one gesture is live; a pointer-down while not idle is ignored.
//! 2. A rejected candidate changes nothing and keeps the gesture armed.
//! 3. Updates already applied are never rolled back when a gesture ends.

use tracing::{debug, trace};

use super::constraints::{Rejection, ShiftConstraints, Verdict};
use crate::model::{ShiftEntry, ShiftStore, TimeOfDay, TimeScale};

/// Which boundary of a shift an edge handle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

/// Where on a shift bar the pointer went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grab {
    Body,
    Edge(Edge),
}

/// State captured when a move gesture starts.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSnapshot {
    pub shift_id: String,
    pub pointer_start_x: f32,
    pub original_start: TimeOfDay,
    pub original_end: TimeOfDay,
}

/// State captured when a resize gesture starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSnapshot {
    pub grip: DragSnapshot,
    pub edge: Edge,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragSnapshot),
    Resizing(ResizeSnapshot),
}

/// Result of feeding one pointer-move event to the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// No gesture is armed.
    Idle,
    /// The candidate passed validation and was written to the store.
    Updated(ShiftEntry),
    /// The candidate broke a constraint; the entry is unchanged.
    Rejected(Rejection),
    /// The grabbed shift is gone from the store; the gesture was dropped.
    ShiftMissing,
}

struct Candidate {
    shift_id: String,
    start: i32,
    end: i32,
}

/// Owns the gesture state between pointer events.
#[derive(Debug, Clone, Default)]
pub struct TimelineEditor {
    state: InteractionState,
    scale: TimeScale,
    constraints: ShiftConstraints,
}

impl TimelineEditor {
    pub fn new(scale: TimeScale, constraints: ShiftConstraints) -> Self {
        Self {
            state: InteractionState::Idle,
            scale,
            constraints,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, InteractionState::Idle)
    }

    /// Id of the shift under an active gesture, if any.
    pub fn active_shift(&self) -> Option<&str> {
        match &self.state {
            InteractionState::Idle => None,
            InteractionState::Dragging(s) => Some(&s.shift_id),
            InteractionState::Resizing(r) => Some(&r.grip.shift_id),
        }
    }

    pub fn scale(&self) -> &TimeScale {
        &self.scale
    }

    pub fn scale_mut(&mut self) -> &mut TimeScale {
        &mut self.scale
    }

    pub fn constraints(&self) -> &ShiftConstraints {
        &self.constraints
    }

    /// Arm a gesture on `shift_id`. Returns `false` (and changes nothing) when
    /// another gesture is already live or the shift does not exist.
    pub fn pointer_down<S>(&mut self, store: &S, shift_id: &str, grab: Grab, x: f32) -> bool
    where
        S: ShiftStore + ?Sized,
    {
        if let Some(active) = self.active_shift() {
            trace!(active, ignored = shift_id, "pointer down while a gesture is live");
            return false;
        }
        let Some(entry) = store.find_by_id(shift_id) else {
            debug!(shift_id, "pointer down on unknown shift");
            return false;
        };

        let grip = DragSnapshot {
            shift_id: entry.id.clone(),
            pointer_start_x: x,
            original_start: entry.start,
            original_end: entry.end,
        };
        self.state = match grab {
            Grab::Body => InteractionState::Dragging(grip),
            Grab::Edge(edge) => InteractionState::Resizing(ResizeSnapshot { grip, edge }),
        };
        debug!(shift_id, ?grab, x, "gesture armed");
        true
    }

    /// Derive, validate and apply a candidate interval for pointer `x`.
    pub fn pointer_move<S>(&mut self, store: &mut S, x: f32) -> MoveOutcome
    where
        S: ShiftStore + ?Sized,
    {
        let Some(shift_id) = self.active_shift() else {
            return MoveOutcome::Idle;
        };
        if store.find_by_id(shift_id).is_none() {
            debug!(shift_id, "grabbed shift vanished; dropping gesture");
            self.state = InteractionState::Idle;
            return MoveOutcome::ShiftMissing;
        }

        let candidate = match &self.state {
            InteractionState::Idle => return MoveOutcome::Idle,
            InteractionState::Dragging(s) => {
                let delta = self.scale.pixels_to_minutes(x - s.pointer_start_x);
                Candidate {
                    shift_id: s.shift_id.clone(),
                    start: s.original_start.minutes() + delta,
                    end: s.original_end.minutes() + delta,
                }
            }
            InteractionState::Resizing(r) => {
                let delta = self.scale.pixels_to_minutes(x - r.grip.pointer_start_x);
                let (start, end) = match r.edge {
                    Edge::Start => (r.grip.original_start.minutes() + delta, r.grip.original_end.minutes()),
                    Edge::End => (r.grip.original_start.minutes(), r.grip.original_end.minutes() + delta),
                };
                if !self.constraints.respects_floor(start, end) {
                    trace!(start, end, "resize candidate below duration floor");
                    return MoveOutcome::Rejected(Rejection::TooShort);
                }
                Candidate {
                    shift_id: r.grip.shift_id.clone(),
                    start,
                    end,
                }
            }
        };

        if let Verdict::Rejected(reason) = self.constraints.validate(candidate.start, candidate.end) {
            trace!(start = candidate.start, end = candidate.end, ?reason, "candidate rejected");
            return MoveOutcome::Rejected(reason);
        }
        let (Some(start), Some(end)) = (
            TimeOfDay::from_minutes(candidate.start),
            TimeOfDay::from_minutes(candidate.end),
        ) else {
            return MoveOutcome::Rejected(Rejection::EndsAfterMidnight);
        };

        match store.replace(&candidate.shift_id, start, end) {
            Some(entry) => MoveOutcome::Updated(entry),
            None => {
                self.state = InteractionState::Idle;
                MoveOutcome::ShiftMissing
            }
        }
    }

    /// End the gesture. Returns whether one was live.
    pub fn pointer_up(&mut self) -> bool {
        self.disarm("pointer up")
    }

    /// The pointer left the timeline area; same effect as releasing it.
    pub fn pointer_leave(&mut self) -> bool {
        self.disarm("pointer left timeline")
    }

    fn disarm(&mut self, cause: &'static str) -> bool {
        match std::mem::take(&mut self.state) {
            InteractionState::Idle => false,
            _ => {
                debug!(cause, "gesture ended");
                true
            }
        }
    }
}
