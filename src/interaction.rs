//! The press button's brain: wires press tracking to the reveal.
//!
//! [`Interaction`] owns the tracker, the sequencer, the random source and the
//! name lookup. Front-ends forward pointer input and scheduler callbacks to
//! it and render whatever it reports to their [`RevealObserver`].

use rand::Rng;

use crate::clock::Clock;
use crate::color::ColorSample;
use crate::mapping::map_duration_to_color;
use crate::names::NameLookup;
use crate::observer::RevealObserver;
use crate::reveal::{RevealEvent, RevealSequencer, RevealTiming};
use crate::schedule::{FrameScheduler, Timers};
use crate::tracker::{FrameToken, Lockout, PressTracker};

/// Press tracking and reveal sequencing behind one lockout.
#[derive(Debug)]
pub struct Interaction<C, R, L> {
    tracker: PressTracker<C>,
    sequencer: RevealSequencer,
    lockout: Lockout,
    rng: R,
    lookup: L,
}

impl<C: Clock, R: Rng, L: NameLookup> Interaction<C, R, L> {
    /// Create an idle, unlocked interaction.
    pub fn new(clock: C, rng: R, lookup: L, timing: RevealTiming) -> Self {
        let lockout = Lockout::new();
        Self {
            tracker: PressTracker::new(clock, lockout.clone()),
            sequencer: RevealSequencer::new(timing, lockout.clone()),
            lockout,
            rng,
            lookup,
        }
    }

    /// Pointer went down.
    ///
    /// Returns `false` when the press was ignored because a reveal is running.
    pub fn press_start<F: FrameScheduler + ?Sized>(&mut self, frames: &mut F) -> bool {
        let Some(token) = self.tracker.start() else {
            return false;
        };
        self.sequencer.reset();
        frames.request_frame(token);
        true
    }

    /// A frame callback arrived.
    ///
    /// Stale tokens are dropped. Otherwise the transient color is reported
    /// and the next frame requested while the press lasts.
    pub fn on_frame<F, O>(&mut self, token: FrameToken, frames: &mut F, observer: &mut O)
    where
        F: FrameScheduler + ?Sized,
        O: RevealObserver + ?Sized,
    {
        if !self.tracker.claim_frame(token) {
            return;
        }
        if let Some((elapsed, sample)) = self.tracker.sample(&mut self.rng) {
            observer.on_tick(&sample, elapsed);
        }
        if let Some(next) = self.tracker.next_frame() {
            frames.request_frame(next);
        }
    }

    /// Pointer went up.
    ///
    /// Ends the press, picks the final color and starts its reveal. Returns
    /// the final color, or `None` if no press was in progress.
    pub fn press_end<T, O>(&mut self, timers: &mut T, observer: &mut O) -> Option<ColorSample>
    where
        T: Timers + ?Sized,
        O: RevealObserver + ?Sized,
    {
        let duration = self.tracker.stop()?;
        observer.on_released(duration);

        let color = map_duration_to_color(duration, &mut self.rng);
        self.sequencer
            .begin(color.clone(), &self.lookup, timers, observer);
        Some(color)
    }

    /// A reveal timer fired.
    pub fn on_timer<O: RevealObserver + ?Sized>(&mut self, event: RevealEvent, observer: &mut O) -> bool {
        self.sequencer.fire(event, observer)
    }

    /// Whether presses are currently ignored.
    pub fn is_locked(&self) -> bool {
        self.lockout.is_locked()
    }

    /// The press tracker.
    pub fn tracker(&self) -> &PressTracker<C> {
        &self.tracker
    }

    /// The reveal sequencer.
    pub fn sequencer(&self) -> &RevealSequencer {
        &self.sequencer
    }
}
