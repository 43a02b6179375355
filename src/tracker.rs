//! Press lifecycle tracking.
//!
//! [`PressTracker`] records when a press started and turns the elapsed time
//! into a transient color on every frame. It never schedules anything itself:
//! a [`FrameScheduler`](crate::FrameScheduler) calls back with the
//! [`FrameToken`] the tracker handed out, and the tracker ignores any token
//! that is no longer the pending one.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::clock::Clock;
use crate::color::ColorSample;
use crate::mapping::map_duration_to_color;

/// Identifies one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

/// Interaction lockout shared between the tracker and the reveal sequencer.
///
/// Set while a reveal animation runs; presses are ignored until it clears.
#[derive(Debug, Clone, Default)]
pub struct Lockout(Rc<Cell<bool>>);

impl Lockout {
    /// An unlocked flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether interaction is currently locked.
    pub fn is_locked(&self) -> bool {
        self.0.get()
    }

    /// Set the flag, returning whether it changed.
    pub(crate) fn set(&self, locked: bool) -> bool {
        self.0.replace(locked) != locked
    }
}

/// An in-progress press.
#[derive(Debug, Clone, Copy)]
struct PressSession {
    started: Instant,
}

/// Tracks the press in progress and samples its color.
#[derive(Debug)]
pub struct PressTracker<C> {
    clock: C,
    lockout: Lockout,
    session: Option<PressSession>,
    last_duration: Option<Duration>,
    pending_frame: Option<FrameToken>,
    next_token: u64,
}

impl<C: Clock> PressTracker<C> {
    /// Create an idle tracker reading time from `clock`.
    pub fn new(clock: C, lockout: Lockout) -> Self {
        Self {
            clock,
            lockout,
            session: None,
            last_duration: None,
            pending_frame: None,
            next_token: 0,
        }
    }

    /// Begin a press at the current instant.
    ///
    /// Ignored while the lockout is set. Otherwise returns the token for the
    /// first frame; any frame token from an earlier press becomes stale.
    pub fn start(&mut self) -> Option<FrameToken> {
        if self.lockout.is_locked() {
            tracing::debug!("Press ignored: reveal in progress");
            return None;
        }
        self.session = Some(PressSession {
            started: self.clock.now(),
        });
        tracing::debug!("Press started");
        Some(self.issue_frame())
    }

    /// Time since the press started, if one is in progress.
    pub fn elapsed(&self) -> Option<Duration> {
        let session = self.session?;
        Some(self.clock.now().saturating_duration_since(session.started))
    }

    /// The transient color for the press in progress.
    pub fn tick<R: Rng>(&self, rng: &mut R) -> Option<ColorSample> {
        self.sample(rng).map(|(_, sample)| sample)
    }

    /// Like [`tick`](Self::tick), also returning the elapsed time the color
    /// was derived from. Reads the clock once.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<(Duration, ColorSample)> {
        let elapsed = self.elapsed()?;
        let sample = map_duration_to_color(elapsed, rng);
        tracing::trace!(elapsed_ms = elapsed.as_millis() as u64, hex = sample.hex(), "Tick");
        Some((elapsed, sample))
    }

    /// End the press and return its total duration.
    ///
    /// Cancels the pending frame. Returns `None` when no press was running.
    pub fn stop(&mut self) -> Option<Duration> {
        let elapsed = self.elapsed()?;
        self.session = None;
        self.pending_frame = None;
        self.last_duration = Some(elapsed);
        tracing::debug!("Press ended after {}ms", elapsed.as_millis());
        Some(elapsed)
    }

    /// Whether a press is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Duration of the most recently finished press.
    pub fn last_duration(&self) -> Option<Duration> {
        self.last_duration
    }

    /// Consume `token` if it is the pending frame.
    ///
    /// Returns `false` for stale tokens, which callers must drop.
    pub fn claim_frame(&mut self, token: FrameToken) -> bool {
        if self.pending_frame == Some(token) {
            self.pending_frame = None;
            true
        } else {
            false
        }
    }

    /// Issue the token for the next frame while a press is in progress.
    pub fn next_frame(&mut self) -> Option<FrameToken> {
        if self.is_active() {
            Some(self.issue_frame())
        } else {
            None
        }
    }

    fn issue_frame(&mut self) -> FrameToken {
        self.next_token += 1;
        let token = FrameToken(self.next_token);
        self.pending_frame = Some(token);
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tracker(clock: &ManualClock) -> PressTracker<&ManualClock> {
        PressTracker::new(clock, Lockout::new())
    }

    #[test]
    fn idle_tracker_has_no_color() {
        let clock = ManualClock::new();
        let t = tracker(&clock);
        assert!(!t.is_active());
        assert!(t.tick(&mut StdRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn stop_returns_elapsed_and_freezes_it() {
        let clock = ManualClock::new();
        let mut t = tracker(&clock);
        t.start();
        clock.advance(Duration::from_millis(1200));
        assert_eq!(t.elapsed(), Some(Duration::from_millis(1200)));
        assert_eq!(t.stop(), Some(Duration::from_millis(1200)));

        clock.advance(Duration::from_millis(800));
        assert_eq!(t.last_duration(), Some(Duration::from_millis(1200)));
        assert!(!t.is_active());
        assert_eq!(t.stop(), None);
    }

    #[test]
    fn tick_follows_elapsed_time() {
        let clock = ManualClock::new();
        let mut t = tracker(&clock);
        t.start();
        clock.advance(Duration::from_millis(2500));
        let c = t.tick(&mut StdRng::seed_from_u64(3)).unwrap();
        // base hue 180 ± 30
        assert!((150.0..210.0).contains(&c.hue()), "hue {}", c.hue());
    }

    #[test]
    fn start_is_ignored_while_locked() {
        let clock = ManualClock::new();
        let lockout = Lockout::new();
        let mut t = PressTracker::new(&clock, lockout.clone());
        lockout.set(true);
        assert!(t.start().is_none());
        assert!(!t.is_active());

        lockout.set(false);
        assert!(t.start().is_some());
        assert!(t.is_active());
    }

    #[test]
    fn only_the_pending_frame_is_claimed() {
        let clock = ManualClock::new();
        let mut t = tracker(&clock);
        let first = t.start().unwrap();
        assert!(t.claim_frame(first));
        assert!(!t.claim_frame(first));

        let second = t.next_frame().unwrap();
        // A restart supersedes the frame scheduled for the old press
        let restarted = t.start().unwrap();
        assert!(!t.claim_frame(second));
        assert!(t.claim_frame(restarted));
    }

    #[test]
    fn stop_cancels_the_pending_frame() {
        let clock = ManualClock::new();
        let mut t = tracker(&clock);
        let token = t.start().unwrap();
        t.stop();
        assert!(!t.claim_frame(token));
        assert!(t.next_frame().is_none());
    }

    #[test]
    fn lockout_set_reports_changes() {
        let lockout = Lockout::new();
        assert!(lockout.set(true));
        assert!(!lockout.set(true));
        assert!(lockout.is_locked());
        assert!(lockout.set(false));
    }
}
