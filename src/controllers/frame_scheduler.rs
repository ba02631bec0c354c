use std::time::{Duration, Instant};

/// Decides when an event-driven loop should show the next level, mirroring
/// the pauses of [`SnowflakeController::run`](super::snowflake::SnowflakeController::run)
/// without blocking.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    frame_delay: Duration,
    final_hold: Duration,
    deadline: Instant,
    phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Showing,
    Holding,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    /// Nothing due yet; sleep until the given instant.
    Wait(Instant),
    /// Present the next level, then call [`FrameScheduler::record_step`].
    Step,
    /// The last frame has been held long enough.
    Exit,
}

impl FrameScheduler {
    #[must_use]
    pub fn new(frame_delay: Duration, final_hold: Duration, now: Instant) -> Self {
        Self {
            frame_delay,
            final_hold,
            deadline: now,
            phase: Phase::Showing,
        }
    }

    pub fn poll(&mut self, now: Instant) -> FrameAction {
        if self.phase == Phase::Done {
            return FrameAction::Exit;
        }

        if now < self.deadline {
            return FrameAction::Wait(self.deadline);
        }

        match self.phase {
            Phase::Showing => FrameAction::Step,
            Phase::Holding | Phase::Done => {
                self.phase = Phase::Done;
                FrameAction::Exit
            }
        }
    }

    /// `shown` is false once the controller has no levels left.
    pub fn record_step(&mut self, now: Instant, shown: bool) {
        if shown {
            self.deadline = now + self.frame_delay;
        } else {
            self.phase = Phase::Holding;
            self.deadline = now + self.final_hold;
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}
