//! Monotonic microsecond clocks.

use std::thread;
use std::time::{Duration, Instant};

use crate::pacer::Pacing;

pub trait Clock {
    /// Microseconds since an arbitrary fixed origin; never decreases.
    fn now_us(&self) -> u64;

    /// Block until `now_us() >= deadline_us`.
    fn wait_until(&mut self, deadline_us: u64, pacing: Pacing);
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }

    fn wait_until(&mut self, deadline_us: u64, pacing: Pacing) {
        (**self).wait_until(deadline_us, pacing)
    }
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_us(&self) -> u64 {
        self.origin.elapsed().as_micros() as u64
    }

    fn wait_until(&mut self, deadline_us: u64, pacing: Pacing) {
        loop {
            let now = self.now_us();
            if now >= deadline_us {
                return;
            }
            match pacing {
                Pacing::Spin => std::hint::spin_loop(),
                Pacing::Sleep => thread::sleep(Duration::from_micros(deadline_us - now)),
            }
        }
    }
}

/// Clock that only moves when told to. Waiting jumps straight to the deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn new(start_us: u64) -> Self {
        Self { now: start_us }
    }

    pub fn advance(&mut self, us: u64) {
        self.now += us;
    }
}

impl Clock for ManualClock {
    fn now_us(&self) -> u64 {
        self.now
    }

    fn wait_until(&mut self, deadline_us: u64, _pacing: Pacing) {
        self.now = self.now.max(deadline_us);
    }
}
