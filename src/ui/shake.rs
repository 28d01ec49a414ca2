//! Keyboard stand-in for the shake gesture.
//!
//! A shake registers when the shake key is pressed `presses` times with the
//! first and last press no further apart than `window`.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ShakeDetector {
    presses: usize,
    window: Duration,
    recent: VecDeque<Instant>,
}

impl ShakeDetector {
    pub fn new(presses: u32, window: Duration) -> Self {
        let presses = presses.max(1) as usize;
        Self {
            presses,
            window,
            recent: VecDeque::with_capacity(presses),
        }
    }

    /// Record one press at `now`. Returns true when it completes a shake.
    pub fn register(&mut self, now: Instant) -> bool {
        while let Some(&oldest) = self.recent.front() {
            if now.saturating_duration_since(oldest) > self.window {
                self.recent.pop_front();
            } else {
                break;
            }
        }

        self.recent.push_back(now);
        if self.recent.len() >= self.presses {
            self.recent.clear();
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.recent.clear();
    }
}
