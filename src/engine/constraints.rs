//! Bounds every edited shift interval must satisfy.

use crate::model::MINUTES_PER_DAY;

/// Shortest shift the editor will produce, in minutes.
pub const MIN_SHIFT_MINUTES: i32 = 30;

/// Why a candidate interval was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    StartsBeforeMidnight,
    EndsAfterMidnight,
    TooShort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftConstraints {
    pub day_minutes: i32,
    pub min_duration: i32,
}

impl Default for ShiftConstraints {
    fn default() -> Self {
        Self {
            day_minutes: MINUTES_PER_DAY,
            min_duration: MIN_SHIFT_MINUTES,
        }
    }
}

impl ShiftConstraints {
    /// Check a candidate interval. Rules apply in order and the first
    /// violation wins.
    pub fn validate(&self, start: i32, end: i32) -> Verdict {
        if start < 0 {
            Verdict::Rejected(Rejection::StartsBeforeMidnight)
        } else if end > self.day_minutes {
            Verdict::Rejected(Rejection::EndsAfterMidnight)
        } else if end - start < self.min_duration {
            Verdict::Rejected(Rejection::TooShort)
        } else {
            Verdict::Accepted
        }
    }

    /// Duration floor checked on the moving edge of a resize before the
    /// general rules.
    pub fn respects_floor(&self, start: i32, end: i32) -> bool {
        end - start >= self.min_duration
    }
}
