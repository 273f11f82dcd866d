//! Shared seen-timer gating the lose condition.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionTimer {
    remaining: f32,
    max: f32,
}

impl DetectionTimer {
    pub fn new(max: f32) -> Self {
        Self { remaining: max, max }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Drains while any enemy sees the player and recovers toward the cap otherwise.
    /// Returns true on the tick the timer runs out.
    pub fn advance(&mut self, seen: bool, elapsed: f32) -> bool {
        if seen {
            self.remaining -= elapsed;
            self.remaining <= 0.0
        } else {
            self.remaining = (self.remaining + elapsed).min(self.max);
            false
        }
    }
}
