//! Generation ordinals and their labels.
use std::fmt;

use super::RawValue;

/// Roman numerals for ordinals 1 through 10, indexed by `ordinal - 1`.
pub const ROMAN_NUMERALS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Sequence position of a creature's generation, or unknown.
///
/// Only ordinals 1–10 are representable; anything else is unknown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Option<u8>", into = "Option<u8>")
)]
pub struct Generation(Option<u8>);

impl Generation {
    pub const UNKNOWN: Self = Self(None);
    pub const MAX_ORDINAL: u8 = ROMAN_NUMERALS.len() as u8;

    /// Creates a generation from an ordinal; out-of-range values are unknown.
    pub fn from_ordinal(ordinal: u32) -> Self {
        match u8::try_from(ordinal) {
            Ok(n) if (1..=Self::MAX_ORDINAL).contains(&n) => Self(Some(n)),
            _ => Self::UNKNOWN,
        }
    }

    /// Parses a label whose last word is a roman (I–X) or arabic numeral.
    ///
    /// `"Generation IV"`, `"generation-iv"` and `"gen 4"` all yield 4. The
    /// last word must consist solely of numeral characters: `"gen4"` is
    /// unknown.
    pub fn parse_label(label: &str) -> Self {
        let trimmed = label.trim();
        let start = trimmed
            .char_indices()
            .rev()
            .find(|&(_, c)| !is_word_char(c))
            .map(|(idx, c)| idx + c.len_utf8())
            .unwrap_or(0);
        let token = &trimmed[start..];

        if token.is_empty() {
            return Self::UNKNOWN;
        }

        if token.chars().all(|c| matches!(c.to_ascii_uppercase(), 'I' | 'V' | 'X')) {
            let upper = token.to_ascii_uppercase();
            return ROMAN_NUMERALS
                .iter()
                .position(|numeral| *numeral == upper)
                .map(|idx| Self::from_ordinal(idx as u32 + 1))
                .unwrap_or(Self::UNKNOWN);
        }

        if token.chars().all(|c| c.is_ascii_digit()) {
            return token
                .parse::<u32>()
                .map(Self::from_ordinal)
                .unwrap_or(Self::UNKNOWN);
        }

        Self::UNKNOWN
    }

    /// Interprets a raw source value: a number is taken as the ordinal, text
    /// is parsed as a label.
    pub fn from_raw(value: &RawValue) -> Self {
        match value {
            RawValue::Number(n) if n.fract() == 0.0 && *n >= 1.0 => Self::from_ordinal(*n as u32),
            RawValue::Text(label) => Self::parse_label(label),
            _ => Self::UNKNOWN,
        }
    }

    pub fn ordinal(self) -> Option<u8> {
        self.0
    }

    pub fn is_known(self) -> bool {
        self.0.is_some()
    }

    /// Roman numeral of the ordinal, if known.
    pub fn roman(self) -> Option<&'static str> {
        self.0.map(|n| ROMAN_NUMERALS[n as usize - 1])
    }

    /// Canonical label: `"Generation <roman>"` or `"Unknown"`.
    pub fn label(self) -> String {
        match self.roman() {
            Some(roman) => format!("Generation {roman}"),
            None => "Unknown".to_string(),
        }
    }
}

impl From<Option<u8>> for Generation {
    fn from(ordinal: Option<u8>) -> Self {
        ordinal.map_or(Self::UNKNOWN, |n| Self::from_ordinal(n.into()))
    }
}

impl From<Generation> for Option<u8> {
    fn from(generation: Generation) -> Self {
        generation.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// Mirrors the ASCII `\w` class.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
