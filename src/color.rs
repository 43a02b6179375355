//! ColorSample type: the color produced by a press.
//!
//! Stores hue in degrees (0–360) and saturation/lightness in percent (0–100),
//! alongside the quantized RGB bytes and their hex form.

use crate::math;

/// An immutable HSL color together with its 8-bit RGB rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSample {
    hue: f64,
    saturation: f64,
    lightness: f64,
    rgb: (u8, u8, u8),
    hex: String,
}

impl ColorSample {
    /// Hue in degrees, always in `[0, 360)`.
    pub fn hue(&self) -> f64 {
        self.hue
    }
    /// Saturation in percent (0–100).
    pub fn saturation(&self) -> f64 {
        self.saturation
    }
    /// Lightness in percent (0–100).
    pub fn lightness(&self) -> f64 {
        self.lightness
    }
    /// Uppercase `RRGGBB` (no `#` prefix).
    pub fn hex(&self) -> &str {
        &self.hex
    }
    /// 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }
}

impl ColorSample {
    /// Create from hue in degrees and saturation/lightness in percent.
    ///
    /// Hue is wrapped into `[0, 360)`; saturation and lightness are clamped.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let mut hue = hue.rem_euclid(360.0);
        // rem_euclid can round up to the modulus for tiny negative inputs
        if hue >= 360.0 {
            hue = 0.0;
        }
        let saturation = saturation.clamp(0.0, 100.0);
        let lightness = lightness.clamp(0.0, 100.0);

        let (r, g, b) = math::hsl_to_rgb(hue / 360.0, saturation / 100.0, lightness / 100.0);
        let rgb = (
            math::channel_to_u8(r),
            math::channel_to_u8(g),
            math::channel_to_u8(b),
        );
        Self {
            hue,
            saturation,
            lightness,
            rgb,
            hex: math::rgb_to_hex(rgb.0, rgb.1, rgb.2),
        }
    }

    /// Parse a hex string (with or without `#`, 3 or 6 chars).
    ///
    /// The HSL triple is derived back from the bytes.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let (r, g, b) = math::hex_to_rgb(hex)?;
        let (h, s, l) = math::rgb_to_hsl(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        Some(Self {
            hue: (h * 360.0).rem_euclid(360.0),
            saturation: (s * 100.0).clamp(0.0, 100.0),
            lightness: (l * 100.0).clamp(0.0, 100.0),
            rgb: (r, g, b),
            hex: math::rgb_to_hex(r, g, b),
        })
    }

    /// Format as `#RRGGBB`.
    pub fn css_hex(&self) -> String {
        format!("#{}", self.hex)
    }

    /// The HSL triple recovered from the quantized RGB bytes.
    ///
    /// Matches the generating triple up to 8-bit rounding.
    pub fn rgb_to_hsl(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.rgb;
        let (h, s, l) = math::rgb_to_hsl(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        (h * 360.0, s * 100.0, l * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hsl_formats_zero_padded_hex() {
        let c = ColorSample::from_hsl(240.0, 100.0, 25.0);
        assert_eq!(c.hex(), "000080");
        assert_eq!(c.css_hex(), "#000080");
        assert_eq!(c.to_rgb(), (0, 0, 128));
    }

    #[test]
    fn from_hsl_wraps_hue_and_clamps() {
        let c = ColorSample::from_hsl(-30.0, 150.0, -5.0);
        assert_eq!(c.hue(), 330.0);
        assert_eq!(c.saturation(), 100.0);
        assert_eq!(c.lightness(), 0.0);

        let c = ColorSample::from_hsl(720.0, 50.0, 50.0);
        assert_eq!(c.hue(), 0.0);
    }

    #[test]
    fn conversion_is_deterministic() {
        let a = ColorSample::from_hsl(187.3, 91.2, 47.9);
        let b = ColorSample::from_hsl(187.3, 91.2, 47.9);
        assert_eq!(a, b);
    }

    #[test]
    fn from_hex_recovers_hsl() {
        let c = ColorSample::from_hex("#FF0000").unwrap();
        assert_eq!(c.hue(), 0.0);
        assert!((c.saturation() - 100.0).abs() < 1e-9);
        assert!((c.lightness() - 50.0).abs() < 1e-9);
        assert!(ColorSample::from_hex("nothex").is_none());
    }

    #[test]
    fn hex_round_trips_within_quantization() {
        let c = ColorSample::from_hsl(200.0, 85.0, 52.0);
        let (h, s, l) = c.rgb_to_hsl();
        assert!((h - 200.0).abs() < 1.0, "hue {h}");
        assert!((s - 85.0).abs() < 1.0, "saturation {s}");
        assert!((l - 52.0).abs() < 1.0, "lightness {l}");
    }
}
