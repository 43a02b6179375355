//! Output boundary: what the core tells the presentation layer.

use std::time::Duration;

use crate::color::ColorSample;
use crate::names::NameResolution;

/// Receives everything the press/reveal core emits.
///
/// Every method defaults to a no-op so presenters implement only what they
/// render.
pub trait RevealObserver {
    /// A new transient color for the press in progress.
    fn on_tick(&mut self, _sample: &ColorSample, _elapsed: Duration) {}

    /// The press ended after `duration`.
    fn on_released(&mut self, _duration: Duration) {}

    /// A reveal started for `sample`, already named.
    fn on_reveal_begin(&mut self, _sample: &ColorSample, _name: &NameResolution) {}

    /// Stage `index` (0..=3) of the hex readout appeared.
    fn on_reveal_stage(&mut self, _chunk: &str, _index: usize) {}

    /// The reveal finished.
    fn on_settled(&mut self) {}

    /// Interaction was locked or unlocked.
    fn on_lockout_changed(&mut self, _locked: bool) {}
}

/// Discards everything.
impl RevealObserver for () {}

/// One recorded observer call.
#[derive(Debug, Clone, PartialEq)]
pub enum Observed {
    /// [`RevealObserver::on_tick`]
    Tick {
        /// Hex of the sampled color
        hex: String,
        /// Elapsed press time
        elapsed: Duration,
    },
    /// [`RevealObserver::on_released`]
    Released(Duration),
    /// [`RevealObserver::on_reveal_begin`]
    RevealBegin {
        /// Hex of the revealed color
        hex: String,
        /// Resolved name
        name: NameResolution,
    },
    /// [`RevealObserver::on_reveal_stage`]
    Stage {
        /// Chunk of the readout
        chunk: String,
        /// Stage index
        index: usize,
    },
    /// [`RevealObserver::on_settled`]
    Settled,
    /// [`RevealObserver::on_lockout_changed`]
    Lockout(bool),
}

/// An observer that records every call in order.
///
/// Useful for headless drivers and tests.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    /// Calls received so far, oldest first.
    pub events: Vec<Observed>,
}

impl Recorder {
    /// Drop recorded ticks, keeping the reveal-related calls.
    pub fn without_ticks(&self) -> Vec<Observed> {
        self.events
            .iter()
            .filter(|e| !matches!(e, Observed::Tick { .. }))
            .cloned()
            .collect()
    }
}

impl RevealObserver for Recorder {
    fn on_tick(&mut self, sample: &ColorSample, elapsed: Duration) {
        self.events.push(Observed::Tick {
            hex: sample.hex().to_string(),
            elapsed,
        });
    }

    fn on_released(&mut self, duration: Duration) {
        self.events.push(Observed::Released(duration));
    }

    fn on_reveal_begin(&mut self, sample: &ColorSample, name: &NameResolution) {
        self.events.push(Observed::RevealBegin {
            hex: sample.hex().to_string(),
            name: name.clone(),
        });
    }

    fn on_reveal_stage(&mut self, chunk: &str, index: usize) {
        self.events.push(Observed::Stage {
            chunk: chunk.to_string(),
            index,
        });
    }

    fn on_settled(&mut self) {
        self.events.push(Observed::Settled);
    }

    fn on_lockout_changed(&mut self, locked: bool) {
        self.events.push(Observed::Lockout(locked));
    }
}
