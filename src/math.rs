//! Color math: direct conversions without external dependencies.
//! Hue, saturation and lightness are normalized f64 in 0.0–1.0 here; the
//! public [`ColorSample`](crate::ColorSample) speaks degrees and percent.

/// HSL → RGB. All values 0.0–1.0.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h6 = (h * 6.0).rem_euclid(6.0);
    let x = chroma * (1.0 - (h6 % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;
    let (r, g, b) = match h6.floor() as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    (r + m, g + m, b + m)
}

/// RGB → HSL. All values 0.0–1.0.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return (0.0, 0.0, l);
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, l)
}

/// Quantize a 0.0–1.0 channel to a byte, rounding to nearest.
pub(crate) fn channel_to_u8(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Format three bytes as uppercase `RRGGBB` (no `#` prefix).
pub(crate) fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("{:02X}{:02X}{:02X}", r, g, b)
}

/// Normalize a hex string: strip `#`, expand shorthand, uppercase.
///
/// Returns `None` unless the input is 3 or 6 hex digits.
pub(crate) fn normalize_hex(hex: &str) -> Option<String> {
    let stripped = hex.trim().trim_start_matches('#');
    if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match stripped.len() {
        3 => {
            let mut out = String::with_capacity(6);
            for c in stripped.chars() {
                out.push(c);
                out.push(c);
            }
            Some(out.to_ascii_uppercase())
        }
        6 => Some(stripped.to_ascii_uppercase()),
        _ => None,
    }
}

/// Parse a normalized `RRGGBB` string into bytes.
pub(crate) fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = normalize_hex(hex)?;
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Squared "redmean" distance between two sRGB colors.
///
/// A cheap perceptual approximation that weights the red and blue terms by
/// the mean red level of the pair.
pub(crate) fn redmean_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
    let rmean = (a.0 as f64 + b.0 as f64) / 2.0;
    let dr = a.0 as f64 - b.0 as f64;
    let dg = a.1 as f64 - b.1 as f64;
    let db = a.2 as f64 - b.2 as f64;
    (2.0 + rmean / 256.0) * dr * dr + 4.0 * dg * dg + (2.0 + (255.0 - rmean) / 256.0) * db * db
}
