// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides the frame clock used to drive animation.

use std::time::{Duration, Instant};

/// A monotonic clock tracking total elapsed time and per-frame deltas.
///
/// Sketches animate on total elapsed seconds rather than accumulated deltas,
/// so the clock keeps its start instant around for the whole run. Call
/// [`Clock::tick`] once per frame to refresh the delta.
#[derive(Debug, Clone)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    delta: Duration,
}

impl Clock {
    /// Creates a new clock, started at the current instant.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            delta: Duration::ZERO,
        }
    }

    /// Advances the clock by one frame and returns the total elapsed seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta = now - self.last_tick;
        self.last_tick = now;
        self.elapsed_secs()
    }

    /// Returns the time elapsed since the clock was created or restarted.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns the elapsed time in seconds as an `f32`.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }

    /// Returns the elapsed time in seconds as an `f64`.
    #[inline]
    pub fn elapsed_secs_f64(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Returns the duration of the last frame in seconds.
    #[inline]
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Resets the clock so elapsed time starts counting from now.
    pub fn restart(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_tick = now;
        self.delta = Duration::ZERO;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_elapsed_is_monotonic() {
        let clock = Clock::new();
        let first = clock.elapsed_secs();
        let second = clock.elapsed_secs();
        assert!(second >= first);
    }

    #[test]
    fn test_tick_updates_delta() {
        let mut clock = Clock::new();
        assert_eq!(clock.delta_secs(), 0.0);

        thread::sleep(Duration::from_millis(10));
        let elapsed = clock.tick();
        assert!(elapsed >= 0.01);
        assert!(clock.delta_secs() >= 0.01);
    }

    #[test]
    fn test_restart_resets_elapsed() {
        let mut clock = Clock::new();
        thread::sleep(Duration::from_millis(10));
        assert!(clock.elapsed_secs() >= 0.01);

        clock.restart();
        assert!(clock.elapsed_secs() < 0.01);
        assert_eq!(clock.delta_secs(), 0.0);
    }
}
