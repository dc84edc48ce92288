//! Creature records in their comparable, canonical form.
//!
//! Raw source data arrives as [`RawCreature`] values with loosely typed
//! fields. [`normalize`] turns one into an immutable [`CreatureRecord`], which
//! is the only shape the comparator, grader and session ever see.
mod generation;
mod normalize;
mod raw;

use std::collections::BTreeSet;
use std::fmt;

pub use generation::{Generation, ROMAN_NUMERALS};
pub use normalize::{canonical_name, normalize};
pub use raw::{RawCreature, RawValue};

/// Stable identifier of a creature within its data source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CreatureId(pub u32);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Set of lowercase type tags. Ordered only so that output is stable.
pub type TypeSet = BTreeSet<String>;

/// A creature as seen by the game rules.
///
/// Records are immutable once built; the canonical name is always derived
/// from the display name, and the generation label is derived from the
/// ordinal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "RecordRepr", from = "RecordRepr")
)]
pub struct CreatureRecord {
    id: CreatureId,
    name: String,
    canonical_name: String,
    height: f64,
    weight: f64,
    types: TypeSet,
    generation: Generation,
    image: Option<String>,
}

impl CreatureRecord {
    /// Builds a record from already-clean attribute values.
    ///
    /// The name is lowercased and the canonical name derived from it, so the
    /// record invariants hold regardless of the caller.
    pub fn new(
        id: CreatureId,
        name: &str,
        height: f64,
        weight: f64,
        types: impl IntoIterator<Item = impl AsRef<str>>,
        generation: Generation,
    ) -> Self {
        let name = name.to_lowercase();
        let canonical_name = canonical_name(&name);
        let types = types
            .into_iter()
            .filter_map(|tag| {
                let tag = tag.as_ref().trim().to_lowercase();
                (!tag.is_empty()).then_some(tag)
            })
            .collect();

        Self {
            id,
            name,
            canonical_name,
            height,
            weight,
            types,
            generation,
            image: None,
        }
    }

    /// Attaches an image reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn id(&self) -> CreatureId {
        self.id
    }

    /// Lowercased display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lookup key: trimmed, lowercased, whitespace runs replaced by `-`.
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// Height in meters. Non-finite when the source value was not numeric.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Weight in kilograms. Non-finite when the source value was not numeric.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn types(&self) -> &TypeSet {
        &self.types
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Display name with its first character uppercased.
    pub fn title(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Wire form of [`CreatureRecord`].
///
/// JSON has no representation for NaN, so non-finite measurements travel as
/// `null`. The canonical name is not stored; it is re-derived on load.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RecordRepr {
    id: CreatureId,
    name: String,
    height: Option<f64>,
    weight: Option<f64>,
    types: Vec<String>,
    generation: Generation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

#[cfg(feature = "serde")]
impl From<CreatureRecord> for RecordRepr {
    fn from(record: CreatureRecord) -> Self {
        let finite = |value: f64| value.is_finite().then_some(value);
        Self {
            id: record.id,
            height: finite(record.height),
            weight: finite(record.weight),
            types: record.types.into_iter().collect(),
            generation: record.generation,
            image: record.image,
            name: record.name,
        }
    }
}

#[cfg(feature = "serde")]
impl From<RecordRepr> for CreatureRecord {
    fn from(repr: RecordRepr) -> Self {
        let record = CreatureRecord::new(
            repr.id,
            &repr.name,
            repr.height.unwrap_or(f64::NAN),
            repr.weight.unwrap_or(f64::NAN),
            repr.types,
            repr.generation,
        );
        match repr.image {
            Some(image) => record.with_image(image),
            None => record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lowercases_and_derives_canonical_name() {
        let record = CreatureRecord::new(
            CreatureId(122),
            "Mr. Mime",
            1.3,
            54.5,
            ["Psychic", " FAIRY ", ""],
            Generation::from_ordinal(1),
        );

        assert_eq!(record.name(), "mr. mime");
        assert_eq!(record.canonical_name(), "mr.-mime");
        assert_eq!(record.types().len(), 2);
        assert!(record.types().contains("psychic"));
        assert!(record.types().contains("fairy"));
        assert_eq!(record.title(), "Mr. mime");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn non_finite_measurements_survive_json() {
        let record = CreatureRecord::new(
            CreatureId(7),
            "squirtle",
            f64::NAN,
            9.0,
            ["water"],
            Generation::from_ordinal(1),
        )
        .with_image("https://img/7.png");

        let json = serde_json::to_string(&record).unwrap();
        let back: CreatureRecord = serde_json::from_str(&json).unwrap();

        assert!(back.height().is_nan());
        assert_eq!(back.weight(), 9.0);
        assert_eq!(back.canonical_name(), "squirtle");
        assert_eq!(back.image(), Some("https://img/7.png"));
    }
}
