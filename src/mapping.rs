//! Press duration → color.
//!
//! The base hue turns once every [`HUE_PERIOD_MS`] of hold. On top of it a
//! random [`ColorJitter`] picks the hue offset, saturation and lightness, so
//! two presses of the same length rarely land on the same color.

use std::time::Duration;

use rand::Rng;

use crate::color::ColorSample;
use crate::constants::{HUE_JITTER, HUE_PERIOD_MS, LIGHTNESS_RANGE, SATURATION_RANGE};

/// The random part of a generated color.
///
/// Sampled from an [`Rng`] in production; built by hand in tests to make
/// [`map_duration_with`] fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorJitter {
    /// Degrees added to the base hue, in `[-30, 30)`.
    pub hue_offset: f64,
    /// Saturation in percent, in `[80, 100]`.
    pub saturation: f64,
    /// Lightness in percent, in `[40, 60]`.
    pub lightness: f64,
}

impl ColorJitter {
    /// Draw a jitter from `rng`.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self {
            hue_offset: rng.gen_range(-HUE_JITTER..HUE_JITTER),
            saturation: rng.gen_range(SATURATION_RANGE),
            lightness: rng.gen_range(LIGHTNESS_RANGE),
        }
    }

    /// No hue offset, midpoint saturation and lightness.
    pub fn neutral() -> Self {
        Self {
            hue_offset: 0.0,
            saturation: 90.0,
            lightness: 50.0,
        }
    }
}

/// Hue before jitter: one full turn per [`HUE_PERIOD_MS`] of hold.
pub fn base_hue(duration: Duration) -> f64 {
    let ms = duration.as_secs_f64() * 1000.0;
    (ms / HUE_PERIOD_MS * 360.0) % 360.0
}

/// Map a press duration to a color using an explicit jitter.
pub fn map_duration_with(duration: Duration, jitter: ColorJitter) -> ColorSample {
    let hue = (base_hue(duration) + jitter.hue_offset + 360.0) % 360.0;
    ColorSample::from_hsl(hue, jitter.saturation, jitter.lightness)
}

/// Map a press duration to a color, drawing the jitter from `rng`.
pub fn map_duration_to_color<R: Rng>(duration: Duration, rng: &mut R) -> ColorSample {
    map_duration_with(duration, ColorJitter::sample(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn base_hue_is_periodic() {
        assert_eq!(base_hue(ms(0)), 0.0);
        assert_eq!(base_hue(ms(5000)), 0.0);
        assert_eq!(base_hue(ms(10_000)), 0.0);
        assert!((base_hue(ms(1250)) - 90.0).abs() < 1e-9);
        assert!((base_hue(ms(6250)) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_with_neutral_jitter_is_red() {
        let c = map_duration_with(ms(0), ColorJitter::neutral());
        assert_eq!(c.hue(), 0.0);
        assert_eq!(c.saturation(), 90.0);
        assert_eq!(c.lightness(), 50.0);
        assert_eq!(c.hex(), "F20D0D");
    }

    #[test]
    fn negative_offset_wraps_non_negative() {
        let jitter = ColorJitter {
            hue_offset: -30.0,
            ..ColorJitter::neutral()
        };
        let c = map_duration_with(ms(0), jitter);
        assert_eq!(c.hue(), 330.0);
    }

    #[test]
    fn same_jitter_same_color() {
        let jitter = ColorJitter {
            hue_offset: 12.5,
            saturation: 83.0,
            lightness: 44.0,
        };
        assert_eq!(
            map_duration_with(ms(2718), jitter),
            map_duration_with(ms(2718), jitter)
        );
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = map_duration_to_color(ms(1234), &mut StdRng::seed_from_u64(7));
        let b = map_duration_to_color(ms(1234), &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_duration_stays_near_red() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let c = map_duration_to_color(ms(0), &mut rng);
            assert!(c.hue() < 30.0 || c.hue() >= 330.0, "hue {}", c.hue());
        }
    }

    proptest! {
        /// Property: every generated color is in range and has a 6-digit hex
        #[test]
        fn generated_color_is_in_range(duration_ms in 0u64..1_000_000, seed in any::<u64>()) {
            let c = map_duration_to_color(ms(duration_ms), &mut StdRng::seed_from_u64(seed));
            prop_assert!((0.0..360.0).contains(&c.hue()));
            prop_assert!((80.0..=100.0).contains(&c.saturation()));
            prop_assert!((40.0..=60.0).contains(&c.lightness()));
            prop_assert_eq!(c.hex().len(), 6);
            prop_assert!(c.hex().chars().all(|ch| ch.is_ascii_hexdigit()));
        }

        /// Property: the hex string decodes back to the generating HSL triple
        #[test]
        fn hex_round_trips(duration_ms in 0u64..100_000, seed in any::<u64>()) {
            let c = map_duration_to_color(ms(duration_ms), &mut StdRng::seed_from_u64(seed));
            let (h, s, l) = c.rgb_to_hsl();
            let dh = (h - c.hue()).abs();
            prop_assert!(dh.min(360.0 - dh) < 1.0, "hue {} vs {}", h, c.hue());
            prop_assert!((s - c.saturation()).abs() < 1.5);
            prop_assert!((l - c.lightness()).abs() < 1.5);
        }
    }
}
