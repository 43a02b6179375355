//! Scheduling seams: frame callbacks and delayed reveal events.
//!
//! The core only asks for callbacks; whoever implements these traits decides
//! when they arrive. The floem front-end uses `exec_after`; headless drivers
//! and tests use [`ManualFrames`] and [`ManualTimers`].

use std::time::Duration;

use crate::reveal::RevealEvent;
use crate::tracker::FrameToken;

/// Delivers one frame callback per request, at display cadence.
pub trait FrameScheduler {
    /// Call back with `token` on the next frame.
    fn request_frame(&mut self, token: FrameToken);
}

/// Delivers reveal events after a delay.
pub trait Timers {
    /// Call back with `event` once `after` has passed.
    fn schedule(&mut self, after: Duration, event: RevealEvent);
}

/// Holds the most recently requested frame until it is taken.
#[derive(Debug, Clone, Default)]
pub struct ManualFrames {
    pending: Option<FrameToken>,
}

impl ManualFrames {
    /// An empty frame queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending frame, if any.
    pub fn take(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }

    /// Whether a frame is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self, token: FrameToken) {
        self.pending = Some(token);
    }
}

/// Virtual-time timer queue.
///
/// Events become due once [`advance`](Self::advance) moves virtual time past
/// their deadline, and come out in deadline order (ties in scheduling order).
#[derive(Debug, Clone, Default)]
pub struct ManualTimers {
    now: Duration,
    seq: u64,
    queue: Vec<(Duration, u64, RevealEvent)>,
}

impl ManualTimers {
    /// An empty queue at virtual time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed so far.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of events still waiting.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Time until the next event is due.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue
            .iter()
            .map(|(due, _, _)| due.saturating_sub(self.now))
            .min()
    }

    /// Move virtual time forward by `by` and return the events now due.
    pub fn advance(&mut self, by: Duration) -> Vec<RevealEvent> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<_> = Vec::new();
        self.queue.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, seq, _)| (*at, *seq));
        due.into_iter().map(|(_, _, event)| event).collect()
    }
}

impl Timers for ManualTimers {
    fn schedule(&mut self, after: Duration, event: RevealEvent) {
        self.seq += 1;
        self.queue.push((self.now + after, self.seq, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{RevealStage, RevealStep};

    fn event(step: RevealStep) -> RevealEvent {
        RevealEvent {
            generation: 1,
            step,
        }
    }

    #[test]
    fn timers_release_in_deadline_order() {
        let mut timers = ManualTimers::new();
        timers.schedule(Duration::from_millis(300), event(RevealStep::Settle));
        timers.schedule(
            Duration::from_millis(100),
            event(RevealStep::Stage(RevealStage::Marker)),
        );

        assert_eq!(timers.next_due(), Some(Duration::from_millis(100)));
        assert!(timers.advance(Duration::from_millis(99)).is_empty());

        let fired = timers.advance(Duration::from_millis(300));
        assert_eq!(
            fired,
            vec![
                event(RevealStep::Stage(RevealStage::Marker)),
                event(RevealStep::Settle)
            ]
        );
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn frames_keep_only_the_latest_request() {
        use crate::clock::ManualClock;
        use crate::tracker::{Lockout, PressTracker};

        let clock = ManualClock::new();
        let mut tracker = PressTracker::new(&clock, Lockout::new());
        let mut frames = ManualFrames::new();
        frames.request_frame(tracker.start().unwrap());
        frames.request_frame(tracker.start().unwrap());

        let token = frames.take().unwrap();
        assert!(tracker.claim_frame(token));
        assert!(!frames.is_pending());
    }
}
