//! Frame timing and the FPS counter shown in the window title.

use std::time::{Duration, Instant};

#[inline]
fn seconds(duration: Duration) -> f32 {
    duration.as_secs() as f32 + duration.subsec_nanos() as f32 / 1_000_000_000.0
}

/// Measures the time between frames, and the time since start.
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    start: Instant,
    last: Instant,
    delta: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        FrameTimer::with_start(Instant::now())
    }

    pub fn with_start(start: Instant) -> Self {
        FrameTimer {
            start,
            last: start,
            delta: 0.0,
        }
    }

    /// Starts a new frame now, and returns the seconds since the previous one.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        self.step(Instant::now())
    }

    /// Starts a new frame at `now`, and returns the seconds since the previous
    /// one.
    pub fn step(&mut self, now: Instant) -> f32 {
        self.delta = if now > self.last {
            seconds(now - self.last)
        } else {
            0.0
        };

        if now > self.last {
            self.last = now;
        }

        self.delta
    }

    /// Seconds between the last two frames.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Seconds between the start and the last frame.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        seconds(self.last - self.start)
    }

    /// The instant of the last frame.
    #[inline]
    pub fn now(&self) -> Instant {
        self.last
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        FrameTimer::new()
    }
}

/// Averages the frame rate over a refresh interval and formats it for the
/// window title.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    title: String,
    refresh: f32,
    previous: Instant,
    frames: u32,
}

impl FpsCounter {
    pub fn new<T: Into<String>>(title: T, refresh: f32) -> Self {
        FpsCounter::with_start(title, refresh, Instant::now())
    }

    pub fn with_start<T: Into<String>>(title: T, refresh: f32, start: Instant) -> Self {
        FpsCounter {
            title: title.into(),
            refresh,
            previous: start,
            frames: 0,
        }
    }

    /// Counts a frame at `now`. Once more than the refresh interval elapsed
    /// since the last refresh, returns the new title and restarts counting.
    /// The frame being ticked is counted in the next interval.
    pub fn tick(&mut self, now: Instant) -> Option<String> {
        let mut title = None;

        if now > self.previous {
            let elapsed = seconds(now - self.previous);
            if elapsed > self.refresh {
                title = Some(self.format(elapsed));
                self.previous = now;
                self.frames = 0;
            }
        }

        self.frames += 1;
        title
    }

    fn format(&self, elapsed: f32) -> String {
        let fps = f64::from(self.frames) / f64::from(elapsed);
        let ms = 1000.0 / fps;

        format!(
            "{}    FPS: {:.3}    Frame Time: {:.3} (ms)",
            self.title, fps, ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer() {
        let start = Instant::now();
        let mut timer = FrameTimer::with_start(start);
        assert_eq!(timer.delta(), 0.0);

        let delta = timer.step(start + Duration::from_millis(500));
        assert!((delta - 0.5).abs() < 1e-4);

        timer.step(start + Duration::from_millis(750));
        assert!((timer.delta() - 0.25).abs() < 1e-4);
        assert!((timer.elapsed() - 0.75).abs() < 1e-4);

        // Going back in time yields an empty frame.
        assert_eq!(timer.step(start), 0.0);
        assert!((timer.elapsed() - 0.75).abs() < 1e-4);
    }
}
