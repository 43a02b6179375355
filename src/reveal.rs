//! Staged reveal of a released color.
//!
//! On release the sequencer names the color, locks interaction and schedules
//! the readout: `#`, then the red, green and blue bytes, one per stage delay.
//! One settle delay after the last byte it unlocks interaction again.
//!
//! ```text
//! Idle ──begin──▶ Resolving ──▶ Emitting ──4 stages + settle──▶ Settled
//!  ▲                                                               │
//!  └──────────────────────────── reset (next press) ───────────────┘
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::color::ColorSample;
use crate::constants::{CLASSIC_STAGE_DELAY, SETTLE_DELAY, STAGE_DELAY};
use crate::names::{NameLookup, NameResolution};
use crate::observer::RevealObserver;
use crate::schedule::Timers;
use crate::tracker::Lockout;

/// One chunk of the hex readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealStage {
    /// The leading `#`
    Marker,
    /// Red byte
    ByteHigh,
    /// Green byte
    ByteMid,
    /// Blue byte
    ByteLow,
}

impl RevealStage {
    /// All stages in emission order.
    pub const ALL: [RevealStage; 4] = [
        RevealStage::Marker,
        RevealStage::ByteHigh,
        RevealStage::ByteMid,
        RevealStage::ByteLow,
    ];

    /// Position in emission order (0..=3).
    pub fn index(self) -> usize {
        match self {
            RevealStage::Marker => 0,
            RevealStage::ByteHigh => 1,
            RevealStage::ByteMid => 2,
            RevealStage::ByteLow => 3,
        }
    }

    /// The text this stage contributes for `color`.
    pub fn chunk(self, color: &ColorSample) -> &str {
        let hex = color.hex();
        match self {
            RevealStage::Marker => "#",
            RevealStage::ByteHigh => &hex[0..2],
            RevealStage::ByteMid => &hex[2..4],
            RevealStage::ByteLow => &hex[4..6],
        }
    }
}

/// What a scheduled reveal callback should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Show a readout chunk
    Stage(RevealStage),
    /// Finish and unlock
    Settle,
}

/// A delayed reveal callback.
///
/// Events from a superseded reveal carry an older generation and are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealEvent {
    /// Reveal this event belongs to
    pub generation: u64,
    /// What to do when it fires
    pub step: RevealStep,
}

/// Delays of the reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Time between consecutive stages (and before the first)
    pub stage_delay: Duration,
    /// Extra time after the last stage before unlocking
    pub settle_delay: Duration,
}

impl RevealTiming {
    /// The slower schedule of the first iterations: 700 ms per stage.
    pub const CLASSIC: RevealTiming = RevealTiming {
        stage_delay: CLASSIC_STAGE_DELAY,
        settle_delay: SETTLE_DELAY,
    };

    /// When `stage` appears, measured from `begin`.
    pub fn stage_at(&self, stage: RevealStage) -> Duration {
        self.stage_delay * (stage.index() as u32 + 1)
    }

    /// When interaction unlocks, measured from `begin`.
    pub fn settle_at(&self) -> Duration {
        self.stage_delay * RevealStage::ALL.len() as u32 + self.settle_delay
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            stage_delay: STAGE_DELAY,
            settle_delay: SETTLE_DELAY,
        }
    }
}

/// Millisecond form of [`RevealTiming`] for configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Time between stages, in milliseconds
    pub stage_delay_ms: u64,
    /// Settle time after the last stage, in milliseconds
    pub settle_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let timing = RevealTiming::default();
        Self {
            stage_delay_ms: timing.stage_delay.as_millis() as u64,
            settle_delay_ms: timing.settle_delay.as_millis() as u64,
        }
    }
}

impl From<TimingConfig> for RevealTiming {
    fn from(config: TimingConfig) -> Self {
        Self {
            stage_delay: Duration::from_millis(config.stage_delay_ms),
            settle_delay: Duration::from_millis(config.settle_delay_ms),
        }
    }
}

/// Where the sequencer is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Waiting for a release
    Idle,
    /// Naming the color
    Resolving,
    /// Stages are being released
    Emitting,
    /// All stages shown and interaction unlocked
    Settled,
}

/// Drives the timed reveal of a released color.
#[derive(Debug)]
pub struct RevealSequencer {
    timing: RevealTiming,
    lockout: Lockout,
    state: RevealState,
    generation: u64,
    color: Option<ColorSample>,
    name: Option<NameResolution>,
    revealed: Vec<String>,
}

impl RevealSequencer {
    /// An idle sequencer sharing `lockout` with the press tracker.
    pub fn new(timing: RevealTiming, lockout: Lockout) -> Self {
        Self {
            timing,
            lockout,
            state: RevealState::Idle,
            generation: 0,
            color: None,
            name: None,
            revealed: Vec::with_capacity(RevealStage::ALL.len()),
        }
    }

    /// Start revealing `color`.
    ///
    /// Resolves its name, locks interaction and schedules the four stages
    /// plus the settle on `timers`.
    ///
    /// Callers must not call this again before the sequencer has settled;
    /// the shared lockout is what keeps them from doing so.
    pub fn begin<L, T, O>(&mut self, color: ColorSample, lookup: &L, timers: &mut T, observer: &mut O)
    where
        L: NameLookup + ?Sized,
        T: Timers + ?Sized,
        O: RevealObserver + ?Sized,
    {
        debug_assert!(
            !matches!(self.state, RevealState::Resolving | RevealState::Emitting),
            "begin called during a reveal"
        );

        self.generation += 1;
        self.revealed.clear();
        self.state = RevealState::Resolving;

        let name = lookup.resolve(color.hex());
        tracing::debug!(hex = color.hex(), name = %name.label(), "Resolved color name");

        self.lockout.set(true);
        observer.on_lockout_changed(true);
        observer.on_reveal_begin(&color, &name);

        self.state = RevealState::Emitting;
        for stage in RevealStage::ALL {
            timers.schedule(
                self.timing.stage_at(stage),
                RevealEvent {
                    generation: self.generation,
                    step: RevealStep::Stage(stage),
                },
            );
        }
        timers.schedule(
            self.timing.settle_at(),
            RevealEvent {
                generation: self.generation,
                step: RevealStep::Settle,
            },
        );

        self.color = Some(color);
        self.name = Some(name);
    }

    /// Apply a fired reveal event.
    ///
    /// Returns `false` when the event was stale or out of order and nothing
    /// changed.
    pub fn fire<O: RevealObserver + ?Sized>(&mut self, event: RevealEvent, observer: &mut O) -> bool {
        if event.generation != self.generation || self.state != RevealState::Emitting {
            tracing::trace!(?event, "Dropping stale reveal event");
            return false;
        }

        match event.step {
            RevealStep::Stage(stage) => {
                if stage.index() != self.revealed.len() {
                    tracing::warn!(?stage, "Reveal stage out of order");
                    return false;
                }
                let Some(color) = &self.color else {
                    return false;
                };
                let chunk = stage.chunk(color).to_string();
                tracing::trace!(index = stage.index(), chunk = %chunk, "Reveal stage");
                observer.on_reveal_stage(&chunk, stage.index());
                self.revealed.push(chunk);
            }
            RevealStep::Settle => {
                if self.revealed.len() != RevealStage::ALL.len() {
                    tracing::warn!("Settle fired before all stages");
                    return false;
                }
                self.state = RevealState::Settled;
                if let (Some(color), Some(name)) = (&self.color, &self.name) {
                    tracing::info!("Revealed {} ({})", color.css_hex(), name.label());
                }
                observer.on_settled();
                if self.lockout.set(false) {
                    observer.on_lockout_changed(false);
                }
            }
        }
        true
    }

    /// Return to idle ahead of the next press.
    ///
    /// No-op while a reveal is still running.
    pub fn reset(&mut self) {
        if self.state == RevealState::Settled {
            self.state = RevealState::Idle;
            self.revealed.clear();
        }
    }

    /// Current state.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Chunks shown so far, in order.
    pub fn revealed(&self) -> &[String] {
        &self.revealed
    }

    /// The readout text shown so far.
    pub fn readout(&self) -> String {
        self.revealed.concat()
    }

    /// The color being (or last) revealed.
    pub fn color(&self) -> Option<&ColorSample> {
        self.color.as_ref()
    }

    /// The name of the color being (or last) revealed.
    pub fn name(&self) -> Option<&NameResolution> {
        self.name.as_ref()
    }

    /// The delays in use.
    pub fn timing(&self) -> RevealTiming {
        self.timing
    }
}
