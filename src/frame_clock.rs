use std::time::{Duration, Instant};

/// Fixed-rate frame pacing. Sleeps away whatever is left of each frame;
/// a frame that overruns is not compensated.
pub struct FrameClock {
    frame_duration: Duration,
    frame_start: Instant,
    frames: u64,
    overruns: u64,
}

impl FrameClock {
    pub fn new(frame_duration: Duration) -> Self {
        FrameClock {
            frame_duration,
            frame_start: Instant::now(),
            frames: 0,
            overruns: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Time left in a frame that has taken `elapsed` so far.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.frame_duration.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Ends the current frame: waits out the rest of it and starts the next.
    pub fn tick(&mut self) {
        let elapsed = self.frame_start.elapsed();
        match self.remaining(elapsed) {
            Some(wait) => std::thread::sleep(wait),
            None => {
                self.overruns += 1;
                log::trace!(
                    "Frame {} overran by {:?}",
                    self.frames,
                    elapsed.saturating_sub(self.frame_duration)
                );
            }
        }
        self.frames += 1;
        self.frame_start = Instant::now();
    }
}
