//! Timing, color-range, and sizing constants.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Hold time for one full turn of the hue wheel, in milliseconds
pub const HUE_PERIOD_MS: f64 = 5000.0;

/// Maximum hue jitter either side of the base hue, in degrees
pub const HUE_JITTER: f64 = 30.0;

/// Saturation range of a generated color, in percent
pub const SATURATION_RANGE: RangeInclusive<f64> = 80.0..=100.0;

/// Lightness range of a generated color, in percent
pub const LIGHTNESS_RANGE: RangeInclusive<f64> = 40.0..=60.0;

/// Delay between reveal stages
pub const STAGE_DELAY: Duration = Duration::from_millis(500);

/// Delay between reveal stages in the first iterations of the toy
pub const CLASSIC_STAGE_DELAY: Duration = Duration::from_millis(700);

/// Extra delay after the last stage before interaction unlocks
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Resting color of the button (`#FF0000`)
#[cfg(feature = "widget")]
pub const IDLE_BUTTON_RGB: (u8, u8, u8) = (255, 0, 0);

/// Frame stepping interval for the widget (~60 Hz)
#[cfg(feature = "widget")]
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Diameter of the press button
#[cfg(feature = "widget")]
pub const CIRCLE_SIZE: f32 = 200.0;

/// Gap between widget elements
#[cfg(feature = "widget")]
pub const GAP: f32 = 12.0;

/// Hex readout font size
#[cfg(feature = "widget")]
pub const READOUT_FONT: f32 = 32.0;

/// Color name font size
#[cfg(feature = "widget")]
pub const NAME_FONT: f32 = 16.0;

/// Press-time font size
#[cfg(feature = "widget")]
pub const LABEL_FONT: f32 = 11.0;
