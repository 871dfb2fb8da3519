//! Frame pacing on top of the host's animation callback
//!
//! The browser calls back roughly once per display refresh. Frames closer
//! together than `FRAME_DURATION_MS` are skipped outright. The skipped time is
//! not carried over, so a callback landing just short of the frame duration
//! costs up to one frame of game time. At 60 Hz displays this is invisible.

use crate::consts::FRAME_DURATION_MS;

/// What the host should do with a callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Loop is stopped; do not request another callback
    Stopped,
    /// Too soon since the last processed frame; request another callback
    Skipped,
    /// Run a frame covering `elapsed_ms`, then request another callback
    Process { elapsed_ms: f64 },
}

impl FrameOutcome {
    pub fn wants_next_frame(&self) -> bool {
        !matches!(self, FrameOutcome::Stopped)
    }
}

/// Idle/Running loop state with an explicit stop flag
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    frame_duration_ms: f64,
    last_timestamp: Option<f64>,
    running: bool,
    /// A callback has been requested and not yet delivered
    pending: bool,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(FRAME_DURATION_MS)
    }
}

impl FrameScheduler {
    pub fn new(frame_duration_ms: f64) -> Self {
        Self {
            frame_duration_ms,
            last_timestamp: None,
            running: false,
            pending: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Enter Running. Returns true if the host must request a callback,
    /// false if one is already queued from the previous run.
    pub fn start(&mut self) -> bool {
        self.running = true;
        self.last_timestamp = None;
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Stop the loop. A callback already queued will come back as `Stopped`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Host callback entry with the current timestamp (ms)
    pub fn on_frame(&mut self, timestamp_ms: f64) -> FrameOutcome {
        self.pending = false;
        if !self.running {
            return FrameOutcome::Stopped;
        }

        let outcome = match self.last_timestamp {
            None => {
                self.last_timestamp = Some(timestamp_ms);
                FrameOutcome::Skipped
            }
            Some(last) => {
                let elapsed_ms = timestamp_ms - last;
                if elapsed_ms < self.frame_duration_ms {
                    FrameOutcome::Skipped
                } else {
                    self.last_timestamp = Some(timestamp_ms);
                    FrameOutcome::Process { elapsed_ms }
                }
            }
        };

        self.pending = true;
        outcome
    }

    /// Caller decided not to request the next callback after all
    pub fn cancel_pending(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_scheduler_reports_stopped() {
        let mut frames = FrameScheduler::default();
        assert_eq!(frames.on_frame(100.0), FrameOutcome::Stopped);
        assert!(!frames.on_frame(200.0).wants_next_frame());
    }

    #[test]
    fn test_first_frame_only_records_timestamp() {
        let mut frames = FrameScheduler::default();
        assert!(frames.start());
        assert_eq!(frames.on_frame(1000.0), FrameOutcome::Skipped);
        assert_eq!(
            frames.on_frame(1020.0),
            FrameOutcome::Process { elapsed_ms: 20.0 }
        );
    }

    #[test]
    fn test_frames_closer_than_duration_are_dropped() {
        let mut frames = FrameScheduler::new(16.0);
        frames.start();
        frames.on_frame(0.0);

        assert_eq!(frames.on_frame(8.0), FrameOutcome::Skipped);
        assert_eq!(frames.on_frame(15.0), FrameOutcome::Skipped);
        // Measured from the last processed frame, not the last callback
        assert_eq!(
            frames.on_frame(16.0),
            FrameOutcome::Process { elapsed_ms: 16.0 }
        );
        assert_eq!(frames.on_frame(20.0), FrameOutcome::Skipped);
    }

    #[test]
    fn test_stop_wins_over_queued_callback() {
        let mut frames = FrameScheduler::default();
        frames.start();
        frames.on_frame(0.0);
        assert!(frames.is_pending());

        frames.stop();
        assert_eq!(frames.on_frame(100.0), FrameOutcome::Stopped);
        assert!(!frames.is_pending());
    }

    #[test]
    fn test_restart_reuses_queued_callback() {
        let mut frames = FrameScheduler::default();
        frames.start();
        frames.on_frame(0.0);
        frames.stop();

        // Callback from the old run still queued: no second chain
        assert!(!frames.start());
        assert_eq!(frames.on_frame(500.0), FrameOutcome::Skipped);
        assert_eq!(
            frames.on_frame(520.0),
            FrameOutcome::Process { elapsed_ms: 20.0 }
        );
    }

    #[test]
    fn test_restart_after_drained_requests_callback() {
        let mut frames = FrameScheduler::default();
        frames.start();
        frames.stop();
        assert_eq!(frames.on_frame(0.0), FrameOutcome::Stopped);
        assert!(frames.start());
    }
}
