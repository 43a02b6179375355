//! Color naming: resolves a hex value to a human-readable name.
//!
//! A [`ColorNameTable`] answers exact (case-insensitive) hex matches first and
//! falls back to the nearest entry under the redmean RGB distance. Tables load
//! from the `color-name-list` JSON shape (`[{ "name": ..., "hex": ... }]`) or
//! come from the built-in list.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::math;

/// Prefix shown in front of approximate names.
pub const APPROXIMATE_PREFIX: &str = "~ ";

/// The outcome of naming a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameResolution {
    /// `true` only when the hex matched a table entry byte for byte.
    pub exact_match: bool,
    /// Name of the matched or nearest entry.
    pub name: String,
}

impl NameResolution {
    /// Display form: approximate names carry [`APPROXIMATE_PREFIX`].
    pub fn label(&self) -> String {
        if self.exact_match {
            self.name.clone()
        } else {
            format!("{APPROXIMATE_PREFIX}{}", self.name)
        }
    }
}

/// Anything that can name a hex color.
///
/// Implementations must be deterministic and total: every input gets a name.
pub trait NameLookup {
    /// Name the color `hex` (`RRGGBB`, with or without `#`).
    fn resolve(&self, hex: &str) -> NameResolution;
}

/// One entry of a `color-name-list` style palette.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorName {
    /// Human-readable name
    pub name: String,
    /// Hex value, with or without `#`
    pub hex: String,
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    hex: String,
    rgb: (u8, u8, u8),
}

/// A static, non-empty table of named colors.
#[derive(Debug, Clone)]
pub struct ColorNameTable {
    entries: Vec<Entry>,
}

impl ColorNameTable {
    /// Build a table from palette entries.
    ///
    /// Fails on an empty palette or on any entry whose hex does not parse.
    pub fn new(names: impl IntoIterator<Item = ColorName>) -> Result<Self> {
        let entries = names
            .into_iter()
            .map(|c| -> Result<Entry> {
                let hex = math::normalize_hex(&c.hex).ok_or_else(|| Error::InvalidHex {
                    name: c.name.clone(),
                    hex: c.hex.clone(),
                })?;
                let rgb = math::hex_to_rgb(&hex).ok_or_else(|| Error::InvalidHex {
                    name: c.name.clone(),
                    hex: c.hex.clone(),
                })?;
                Ok(Entry {
                    name: c.name,
                    hex,
                    rgb,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if entries.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { entries })
    }

    /// The built-in palette.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .filter_map(|&(name, hex)| {
                let rgb = math::hex_to_rgb(hex)?;
                Some(Entry {
                    name: name.to_string(),
                    hex: hex.to_string(),
                    rgb,
                })
            })
            .collect();
        Self { entries }
    }

    /// Parse a `[{ "name", "hex" }]` JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let names: Vec<ColorName> = serde_json::from_str(json)?;
        Self::new(names)
    }

    /// Load a `[{ "name", "hex" }]` JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&json)?;
        tracing::debug!("Loaded {} color names from {}", table.len(), path.display());
        Ok(table)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: constructors reject empty palettes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ColorNameTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NameLookup for ColorNameTable {
    fn resolve(&self, hex: &str) -> NameResolution {
        let Some(hex) = math::normalize_hex(hex) else {
            // Unparseable input still gets a name: the first entry.
            return NameResolution {
                exact_match: false,
                name: self.entries[0].name.clone(),
            };
        };

        if let Some(entry) = self.entries.iter().find(|e| e.hex == hex) {
            return NameResolution {
                exact_match: true,
                name: entry.name.clone(),
            };
        }

        let rgb = math::hex_to_rgb(&hex).unwrap_or_default();
        // Ties keep the earliest entry
        let nearest = self
            .entries
            .iter()
            .fold(None::<(&Entry, f64)>, |best, e| {
                let d = math::redmean_distance_sq(rgb, e.rgb);
                match best {
                    Some((_, best_d)) if best_d <= d => best,
                    _ => Some((e, d)),
                }
            })
            .map(|(e, _)| e.name.clone())
            .unwrap_or_default();

        NameResolution {
            exact_match: false,
            name: nearest,
        }
    }
}

/// Built-in palette: the CSS named colors plus a handful of extras.
const BUILTIN: &[(&str, &str)] = &[
    ("Alice Blue", "F0F8FF"),
    ("Antique White", "FAEBD7"),
    ("Aqua", "00FFFF"),
    ("Aquamarine", "7FFFD4"),
    ("Azure", "F0FFFF"),
    ("Beige", "F5F5DC"),
    ("Bisque", "FFE4C4"),
    ("Black", "000000"),
    ("Blanched Almond", "FFEBCD"),
    ("Blue", "0000FF"),
    ("Blue Violet", "8A2BE2"),
    ("Brown", "A52A2A"),
    ("Burlywood", "DEB887"),
    ("Cadet Blue", "5F9EA0"),
    ("Chartreuse", "7FFF00"),
    ("Chocolate", "D2691E"),
    ("Coral", "FF7F50"),
    ("Cornflower Blue", "6495ED"),
    ("Cornsilk", "FFF8DC"),
    ("Crimson", "DC143C"),
    ("Dark Blue", "00008B"),
    ("Dark Cyan", "008B8B"),
    ("Dark Goldenrod", "B8860B"),
    ("Dark Gray", "A9A9A9"),
    ("Dark Green", "006400"),
    ("Dark Khaki", "BDB76B"),
    ("Dark Magenta", "8B008B"),
    ("Dark Olive Green", "556B2F"),
    ("Dark Orange", "FF8C00"),
    ("Dark Orchid", "9932CC"),
    ("Dark Red", "8B0000"),
    ("Dark Salmon", "E9967A"),
    ("Dark Sea Green", "8FBC8F"),
    ("Dark Slate Blue", "483D8B"),
    ("Dark Slate Gray", "2F4F4F"),
    ("Dark Turquoise", "00CED1"),
    ("Dark Violet", "9400D3"),
    ("Deep Pink", "FF1493"),
    ("Deep Sky Blue", "00BFFF"),
    ("Dim Gray", "696969"),
    ("Dodger Blue", "1E90FF"),
    ("Firebrick", "B22222"),
    ("Floral White", "FFFAF0"),
    ("Forest Green", "228B22"),
    ("Fuchsia", "FF00FF"),
    ("Gainsboro", "DCDCDC"),
    ("Ghost White", "F8F8FF"),
    ("Gold", "FFD700"),
    ("Goldenrod", "DAA520"),
    ("Gray", "808080"),
    ("Green", "008000"),
    ("Green Yellow", "ADFF2F"),
    ("Honeydew", "F0FFF0"),
    ("Hot Pink", "FF69B4"),
    ("Indian Red", "CD5C5C"),
    ("Indigo", "4B0082"),
    ("Ivory", "FFFFF0"),
    ("Khaki", "F0E68C"),
    ("Lavender", "E6E6FA"),
    ("Lavender Blush", "FFF0F5"),
    ("Lawn Green", "7CFC00"),
    ("Lemon Chiffon", "FFFACD"),
    ("Light Blue", "ADD8E6"),
    ("Light Coral", "F08080"),
    ("Light Cyan", "E0FFFF"),
    ("Light Goldenrod Yellow", "FAFAD2"),
    ("Light Gray", "D3D3D3"),
    ("Light Green", "90EE90"),
    ("Light Pink", "FFB6C1"),
    ("Light Salmon", "FFA07A"),
    ("Light Sea Green", "20B2AA"),
    ("Light Sky Blue", "87CEFA"),
    ("Light Slate Gray", "778899"),
    ("Light Steel Blue", "B0C4DE"),
    ("Light Yellow", "FFFFE0"),
    ("Lime", "00FF00"),
    ("Lime Green", "32CD32"),
    ("Linen", "FAF0E6"),
    ("Maroon", "800000"),
    ("Medium Aquamarine", "66CDAA"),
    ("Medium Blue", "0000CD"),
    ("Medium Orchid", "BA55D3"),
    ("Medium Purple", "9370DB"),
    ("Medium Sea Green", "3CB371"),
    ("Medium Slate Blue", "7B68EE"),
    ("Medium Spring Green", "00FA9A"),
    ("Medium Turquoise", "48D1CC"),
    ("Medium Violet Red", "C71585"),
    ("Metro Teal", "00ABA9"),
    ("Midnight Blue", "191970"),
    ("Mint Cream", "F5FFFA"),
    ("Misty Rose", "FFE4E1"),
    ("Moccasin", "FFE4B5"),
    ("Navajo White", "FFDEAD"),
    ("Navy", "000080"),
    ("Old Lace", "FDF5E6"),
    ("Olive", "808000"),
    ("Olive Drab", "6B8E23"),
    ("Orange", "FFA500"),
    ("Orange Red", "FF4500"),
    ("Orchid", "DA70D6"),
    ("Pale Goldenrod", "EEE8AA"),
    ("Pale Green", "98FB98"),
    ("Pale Turquoise", "AFEEEE"),
    ("Pale Violet Red", "DB7093"),
    ("Papaya Whip", "FFEFD5"),
    ("Peach Puff", "FFDAB9"),
    ("Peru", "CD853F"),
    ("Pink", "FFC0CB"),
    ("Plum", "DDA0DD"),
    ("Powder Blue", "B0E0E6"),
    ("Purple", "800080"),
    ("Rebecca Purple", "663399"),
    ("Red", "FF0000"),
    ("Rosy Brown", "BC8F8F"),
    ("Royal Blue", "4169E1"),
    ("Saddle Brown", "8B4513"),
    ("Salmon", "FA8072"),
    ("Sandy Brown", "F4A460"),
    ("Sea Green", "2E8B57"),
    ("Seashell", "FFF5EE"),
    ("Sienna", "A0522D"),
    ("Silver", "C0C0C0"),
    ("Sky Blue", "87CEEB"),
    ("Slate Blue", "6A5ACD"),
    ("Slate Gray", "708090"),
    ("Snow", "FFFAFA"),
    ("Spring Green", "00FF7F"),
    ("Steel Blue", "4682B4"),
    ("Tan", "D2B48C"),
    ("Teal", "008080"),
    ("Thistle", "D8BFD8"),
    ("Tomato", "FF6347"),
    ("Turquoise", "40E0D0"),
    ("Violet", "EE82EE"),
    ("Wheat", "F5DEB3"),
    ("White", "FFFFFF"),
    ("White Smoke", "F5F5F5"),
    ("Yellow", "FFFF00"),
    ("Yellow Green", "9ACD32"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> ColorNameTable {
        ColorNameTable::from_json_str(
            r##"[
                { "name": "Metro Teal", "hex": "#00aba9" },
                { "name": "Red", "hex": "#FF0000" },
                { "name": "Blue", "hex": "#0000ff" }
            ]"##,
        )
        .unwrap()
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let r = palette().resolve("#00ABA9");
        assert_eq!(
            r,
            NameResolution {
                exact_match: true,
                name: "Metro Teal".to_string()
            }
        );
        assert!(palette().resolve("00aba9").exact_match);
    }

    #[test]
    fn absent_hex_resolves_to_nearest() {
        let r = palette().resolve("#F01010");
        assert_eq!(
            r,
            NameResolution {
                exact_match: false,
                name: "Red".to_string()
            }
        );
        assert_eq!(r.label(), "~ Red");
    }

    #[test]
    fn resolution_is_deterministic() {
        let table = ColorNameTable::builtin();
        assert_eq!(table.resolve("3A7F9C"), table.resolve("3A7F9C"));
    }

    #[test]
    fn builtin_table_contains_every_entry() {
        let table = ColorNameTable::builtin();
        assert_eq!(table.len(), BUILTIN.len());
        let r = table.resolve("#00ABA9");
        assert!(r.exact_match);
        assert_eq!(r.name, "Metro Teal");
        assert_eq!(r.label(), "Metro Teal");
    }

    #[test]
    fn unparseable_input_still_gets_a_name() {
        let r = palette().resolve("not a color");
        assert!(!r.exact_match);
        assert_eq!(r.name, "Metro Teal");
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(matches!(
            ColorNameTable::from_json_str("[]"),
            Err(Error::EmptyPalette)
        ));
    }

    #[test]
    fn bad_hex_is_rejected() {
        let err = ColorNameTable::from_json_str(r##"[{ "name": "Oops", "hex": "#12" }]"##)
            .unwrap_err();
        match err {
            Error::InvalidHex { name, hex } => {
                assert_eq!(name, "Oops");
                assert_eq!(hex, "#12");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            ColorNameTable::from_json_str("{"),
            Err(Error::Json(_))
        ));
    }
}
