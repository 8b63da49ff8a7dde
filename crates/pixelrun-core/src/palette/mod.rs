//! Color-to-symbol palettes.
//!
//! A [`Palette`] is an ordered, immutable table of `(color, symbol)` pairs.
//! It is built once, validated at construction, and then shared read-only by
//! any number of encoders.
//!
//! # Invariants
//!
//! - at least one entry
//! - every symbol is unique
//! - every color is unique
//! - no symbol is an ASCII decimal digit, since run counts are written as
//!   digits directly in front of the symbol
//! - no symbol is whitespace or a control character, since segments are
//!   stored one per line and trimmed when read back

mod builtin;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::EncodeError;

/// One palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub color: Rgb,
    pub symbol: char,
}

/// An ordered color-to-symbol table.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    by_color: HashMap<Rgb, usize>,
    by_symbol: HashMap<char, usize>,
}

impl Palette {
    /// Create a palette from `(color, symbol)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::PaletteMisconfigured`] if the table is empty,
    /// repeats a color or symbol, or uses a decimal digit, whitespace or a
    /// control character as a symbol.
    pub fn new<I, C>(entries: I) -> Result<Self, EncodeError>
    where
        I: IntoIterator<Item = (C, char)>,
        C: Into<Rgb>,
    {
        let entries: Vec<PaletteEntry> = entries
            .into_iter()
            .map(|(color, symbol)| PaletteEntry {
                color: color.into(),
                symbol,
            })
            .collect();

        if entries.is_empty() {
            return Err(EncodeError::PaletteMisconfigured(
                "palette has no entries".to_string(),
            ));
        }

        let mut by_color = HashMap::with_capacity(entries.len());
        let mut by_symbol = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            if entry.symbol.is_ascii_digit() {
                return Err(EncodeError::PaletteMisconfigured(format!(
                    "symbol '{}' at index {index} is a decimal digit",
                    entry.symbol
                )));
            }
            if entry.symbol.is_whitespace() || entry.symbol.is_control() {
                return Err(EncodeError::PaletteMisconfigured(format!(
                    "symbol {:?} at index {index} is whitespace or a control character",
                    entry.symbol
                )));
            }
            if by_symbol.insert(entry.symbol, index).is_some() {
                return Err(EncodeError::PaletteMisconfigured(format!(
                    "symbol '{}' at index {index} is used more than once",
                    entry.symbol
                )));
            }
            if by_color.insert(entry.color, index).is_some() {
                return Err(EncodeError::PaletteMisconfigured(format!(
                    "color {} at index {index} is used more than once",
                    entry.color
                )));
            }
        }

        tracing::debug!(entries = entries.len(), "palette constructed");

        Ok(Self {
            entries,
            by_color,
            by_symbol,
        })
    }

    /// The 62-color Rec Room marker palette.
    pub fn rec_room() -> Self {
        Self::from_builtin(&builtin::REC_ROOM)
    }

    /// The full Rec Room marker table (107 colors).
    pub fn rec_room_extended() -> Self {
        Self::from_builtin(&builtin::REC_ROOM_EXTENDED)
    }

    // Built-in tables are covered by tests that run them through `new`.
    fn from_builtin(table: &[([u8; 3], char)]) -> Self {
        let entries: Vec<PaletteEntry> = table
            .iter()
            .map(|&(color, symbol)| PaletteEntry {
                color: Rgb::from(color),
                symbol,
            })
            .collect();
        let by_color = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.color, i))
            .collect();
        let by_symbol = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.symbol, i))
            .collect();
        Self {
            entries,
            by_color,
            by_symbol,
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed palette; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in definition order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Symbol assigned to exactly this color.
    #[inline]
    pub fn symbol_for(&self, color: Rgb) -> Option<char> {
        self.by_color.get(&color).map(|&i| self.entries[i].symbol)
    }

    /// Color assigned to this symbol (reverse lookup for decoding).
    #[inline]
    pub fn color_for(&self, symbol: char) -> Option<Rgb> {
        self.by_symbol.get(&symbol).map(|&i| self.entries[i].color)
    }

    pub fn contains_color(&self, color: Rgb) -> bool {
        self.by_color.contains_key(&color)
    }

    /// All symbols concatenated in definition order.
    pub fn symbols(&self) -> String {
        self.entries.iter().map(|e| e.symbol).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::rec_room()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_color() -> Palette {
        Palette::new([(Rgb::new(0, 0, 0), 'A'), (Rgb::new(255, 255, 255), 'B')]).unwrap()
    }

    #[test]
    fn test_basic_construction() {
        let palette = two_color();
        assert_eq!(palette.len(), 2);
        assert!(!palette.is_empty());
        assert_eq!(palette.symbol_for(Rgb::BLACK), Some('A'));
        assert_eq!(palette.symbol_for(Rgb::WHITE), Some('B'));
        assert_eq!(palette.symbol_for(Rgb::new(1, 1, 1)), None);
        assert_eq!(palette.color_for('B'), Some(Rgb::WHITE));
        assert_eq!(palette.color_for('Z'), None);
        assert_eq!(palette.symbols(), "AB");
    }

    #[test]
    fn test_empty_palette_rejected() {
        let entries: Vec<(Rgb, char)> = vec![];
        assert!(matches!(
            Palette::new(entries),
            Err(EncodeError::PaletteMisconfigured(_))
        ));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let result = Palette::new([(Rgb::new(0, 0, 0), 'A'), (Rgb::new(1, 1, 1), 'A')]);
        assert!(matches!(result, Err(EncodeError::PaletteMisconfigured(_))));
    }

    #[test]
    fn test_duplicate_color_rejected() {
        let result = Palette::new([(Rgb::new(0, 0, 0), 'A'), (Rgb::new(0, 0, 0), 'B')]);
        assert!(matches!(result, Err(EncodeError::PaletteMisconfigured(_))));
    }

    #[test]
    fn test_digit_symbol_rejected() {
        for digit in '0'..='9' {
            let result = Palette::new([(Rgb::new(0, 0, 0), 'A'), (Rgb::new(9, 9, 9), digit)]);
            assert!(
                matches!(result, Err(EncodeError::PaletteMisconfigured(_))),
                "digit {digit} should be rejected"
            );
        }
    }

    #[test]
    fn test_whitespace_and_control_symbols_rejected() {
        for symbol in [' ', '\n', '\r', '\t', '\u{a0}', '\u{7f}', '\0'] {
            let result = Palette::new([(Rgb::new(0, 0, 0), symbol), (Rgb::new(9, 9, 9), 'B')]);
            assert!(
                matches!(result, Err(EncodeError::PaletteMisconfigured(_))),
                "symbol {symbol:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_ascii_numerals_allowed() {
        // Superscripts are numeric in Unicode but never produced by run counts.
        let palette = Palette::new([
            (Rgb::new(0, 0, 0), '²'),
            (Rgb::new(1, 1, 1), '³'),
            (Rgb::new(2, 2, 2), '½'),
        ]);
        assert!(palette.is_ok());
    }

    #[test]
    fn test_rec_room_passes_validation() {
        let builtin = Palette::rec_room();
        assert_eq!(builtin.len(), 62);

        let rebuilt = Palette::new(builtin.entries().iter().map(|e| (e.color, e.symbol)));
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_rec_room_symbols() {
        assert_eq!(
            Palette::rec_room().symbols(),
            "!#$%&()*+,./:;<=>?@[Ñ]^_{|}~¢£¤¥¦§¨©ª«¬Ö®¯°±²³´µ¶·¸¹º»¼½¾¿ÀÈÌÐ"
        );
    }

    #[test]
    fn test_rec_room_extended_passes_validation() {
        let builtin = Palette::rec_room_extended();
        assert_eq!(builtin.len(), 107);

        let rebuilt = Palette::new(builtin.entries().iter().map(|e| (e.color, e.symbol)));
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_extended_is_superset() {
        let base = Palette::rec_room();
        let extended = Palette::rec_room_extended();
        for entry in base.entries() {
            assert_eq!(extended.symbol_for(entry.color), Some(entry.symbol));
        }
    }

    #[test]
    fn test_known_entries() {
        let palette = Palette::rec_room();
        assert_eq!(palette.symbol_for(Rgb::BLACK), Some(']'));
        assert_eq!(palette.color_for('!'), Some(Rgb::new(101, 113, 149)));
        assert_eq!(palette.entries()[0].symbol, '!');
    }

    #[test]
    fn test_default_is_rec_room() {
        assert_eq!(Palette::default().symbols(), Palette::rec_room().symbols());
    }
}
