//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking.
///
/// Frame deltas vary, so elapsed time is accumulated from each tick's
/// clamped dt rather than derived from the tick count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Allocates unit ids. Ids are monotonic and never reused.
#[derive(Debug, Clone)]
pub struct UnitIdAllocator {
    next: u32,
}

impl UnitIdAllocator {
    /// Start handing out ids at `first`.
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for UnitIdAllocator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
