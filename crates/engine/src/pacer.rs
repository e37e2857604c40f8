//! Fixed-rate frame pacing.

use crate::clock::Clock;
use crate::types::frame_budget_us;

/// How the runner waits for the next frame deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Busy-wait; lowest jitter, one core at 100%.
    Spin,
    #[default]
    Sleep,
}

impl Pacing {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "spin" => Some(Pacing::Spin),
            "sleep" => Some(Pacing::Sleep),
            _ => None,
        }
    }
}

/// Frames owed after a long stall are capped; the rest are dropped.
pub const MAX_CATCH_UP_FRAMES: u64 = 8;

/// Counts whole frame budgets elapsed since the last settled frame.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    budget_us: u64,
    last_us: u64,
    pacing: Pacing,
}

impl FramePacer {
    pub fn new(fps: u32, now_us: u64, pacing: Pacing) -> Self {
        Self {
            budget_us: frame_budget_us(fps.max(1)).max(1),
            last_us: now_us,
            pacing,
        }
    }

    pub fn budget_us(&self) -> u64 {
        self.budget_us
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// `elapsed / budget` frames, consuming them.
    ///
    /// The fractional remainder carries over to the next call.
    pub fn frames_due(&mut self, now_us: u64) -> u64 {
        let elapsed = now_us.saturating_sub(self.last_us);
        let due = elapsed / self.budget_us;
        if due > MAX_CATCH_UP_FRAMES {
            self.last_us = now_us - elapsed % self.budget_us;
            return MAX_CATCH_UP_FRAMES;
        }
        self.last_us += due * self.budget_us;
        due
    }

    pub fn next_deadline_us(&self) -> u64 {
        self.last_us + self.budget_us
    }

    pub fn wait<C: Clock + ?Sized>(&self, clock: &mut C) {
        clock.wait_until(self.next_deadline_us(), self.pacing);
    }
}
