//! # floem-hold
//!
//! A press-and-hold color toy for [Floem](https://github.com/lapce/floem).
//!
//! Holding the button cycles its color (one hue turn every five seconds, with
//! a little random jitter); releasing it paints the background and reveals the
//! hex code stage by stage along with the nearest color name.
//!
//! The press/reveal core is headless: [`Interaction`] takes its time from a
//! [`Clock`], its frames from a [`FrameScheduler`] and its delays from
//! [`Timers`], and reports to a [`RevealObserver`]. The `widget` feature wires
//! it to a Floem view.
//!
//! ## Usage
//!
//! Headless, on virtual time:
//!
//! ```rust
//! use std::time::Duration;
//!
//! use floem_hold::{
//!     ColorNameTable, Interaction, ManualClock, ManualFrames, ManualTimers, Recorder,
//!     RevealTiming,
//! };
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let clock = ManualClock::new();
//! let mut press = Interaction::new(
//!     &clock,
//!     StdRng::seed_from_u64(1),
//!     ColorNameTable::builtin(),
//!     RevealTiming::default(),
//! );
//! let (mut frames, mut timers, mut out) = (ManualFrames::new(), ManualTimers::new(), Recorder::default());
//!
//! press.press_start(&mut frames);
//! clock.advance(Duration::from_millis(1200));
//! let color = press.press_end(&mut timers, &mut out).unwrap();
//!
//! for event in timers.advance(RevealTiming::default().settle_at()) {
//!     press.on_timer(event, &mut out);
//! }
//! assert_eq!(press.sequencer().readout(), color.css_hex());
//! assert!(!press.is_locked());
//! ```
#![cfg_attr(
    feature = "widget",
    doc = r#"
In a Floem view tree:

```rust,no_run
use floem_hold::{press_button, ColorNameTable, RevealTiming};

let view = press_button(RevealTiming::default(), ColorNameTable::builtin());
// Use `view` in your Floem view tree.
```
"#
)]

mod clock;
mod color;
mod config;
mod constants;
mod error;
mod interaction;
mod mapping;
mod math;
mod names;
mod observer;
mod reveal;
mod schedule;
mod tracker;
#[cfg(feature = "widget")]
mod widget;

pub use clock::{Clock, ManualClock, SystemClock};
pub use color::ColorSample;
pub use config::PressConfig;
pub use error::{Error, Result};
pub use interaction::Interaction;
pub use mapping::{base_hue, map_duration_to_color, map_duration_with, ColorJitter};
pub use names::{ColorName, ColorNameTable, NameLookup, NameResolution, APPROXIMATE_PREFIX};
pub use observer::{Observed, Recorder, RevealObserver};
pub use reveal::{RevealEvent, RevealSequencer, RevealStage, RevealState, RevealStep, RevealTiming, TimingConfig};
pub use schedule::{FrameScheduler, ManualFrames, ManualTimers, Timers};
pub use tracker::{FrameToken, Lockout, PressTracker};

#[cfg(feature = "widget")]
use std::sync::Once;

#[cfg(feature = "widget")]
use floem::prelude::*;
#[cfg(feature = "widget")]
use floem::text::FONT_SYSTEM;

#[cfg(feature = "widget")]
static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level press button view.
///
/// Reveals run on `timing`; released colors are named from `palette`.
#[cfg(feature = "widget")]
pub fn press_button(timing: RevealTiming, palette: ColorNameTable) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    widget::press_button_view(timing, palette)
}
