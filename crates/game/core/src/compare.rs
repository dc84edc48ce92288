//! Comparison of a guess against the answer.
//!
//! [`compare`] is a pure function producing one categorical [`Judgment`]
//! per attribute. The roles are asymmetric: directions ("too high",
//! "too early") are always stated from the guess's point of view.
use std::cmp::Ordering;

use crate::config::GameConfig;
use crate::record::{CreatureRecord, Generation, TypeSet};

/// Height or weight judgment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericJudgment {
    Match,
    #[strum(serialize = "Too High")]
    TooHigh,
    #[strum(serialize = "Too Low")]
    TooLow,
}

/// Type-tag overlap judgment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeJudgment {
    Match,
    #[strum(serialize = "Partial Match")]
    PartialMatch,
    #[strum(serialize = "No Match")]
    NoMatch,
}

/// Generation proximity judgment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationJudgment {
    Match,
    #[strum(serialize = "Too early")]
    TooEarly,
    #[strum(serialize = "Too late")]
    TooLate,
    Unknown,
}

/// Result of comparing one guess against the answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Judgment {
    pub height: NumericJudgment,
    pub weight: NumericJudgment,
    pub types: TypeJudgment,
    pub generation: GenerationJudgment,
}

impl Judgment {
    /// A guess wins the round iff every field is `Match`.
    pub fn is_full_match(&self) -> bool {
        self.height == NumericJudgment::Match
            && self.weight == NumericJudgment::Match
            && self.types == TypeJudgment::Match
            && self.generation == GenerationJudgment::Match
    }
}

/// Compares `guess` against `answer` on all four attributes.
pub fn compare(guess: &CreatureRecord, answer: &CreatureRecord) -> Judgment {
    Judgment {
        height: compare_numeric(guess.height(), answer.height()),
        weight: compare_numeric(guess.weight(), answer.weight()),
        types: compare_types(guess.types(), answer.types()),
        generation: compare_generation(guess.generation(), answer.generation()),
    }
}

/// Inclusive band `[0.8 × target, 1.2 × target]` a guess must fall in to match.
///
/// A non-finite target collapses the band to `[0, 0]`, as does a zero target,
/// so nearly any positive guess then reads as too high.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToleranceBand {
    pub center: f64,
    pub lo: f64,
    pub hi: f64,
}

impl ToleranceBand {
    pub fn around(target: f64) -> Self {
        let center = if target.is_finite() { target } else { 0.0 };
        Self {
            center,
            lo: center * GameConfig::BAND_LOWER,
            hi: center * GameConfig::BAND_UPPER,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }
}

/// Judges one measurement. NaN guesses never match and read as too low.
pub fn compare_numeric(guess: f64, answer: f64) -> NumericJudgment {
    let band = ToleranceBand::around(answer);
    if band.contains(guess) {
        NumericJudgment::Match
    } else if guess > band.center {
        NumericJudgment::TooHigh
    } else {
        NumericJudgment::TooLow
    }
}

/// Judges type overlap. An empty set on either side cannot be compared.
pub fn compare_types(guess: &TypeSet, answer: &TypeSet) -> TypeJudgment {
    if guess.is_empty() || answer.is_empty() {
        return TypeJudgment::NoMatch;
    }
    if guess == answer {
        TypeJudgment::Match
    } else if guess.intersection(answer).next().is_some() {
        TypeJudgment::PartialMatch
    } else {
        TypeJudgment::NoMatch
    }
}

pub fn compare_generation(guess: Generation, answer: Generation) -> GenerationJudgment {
    match (guess.ordinal(), answer.ordinal()) {
        (Some(g), Some(a)) => match g.cmp(&a) {
            Ordering::Equal => GenerationJudgment::Match,
            Ordering::Less => GenerationJudgment::TooEarly,
            Ordering::Greater => GenerationJudgment::TooLate,
        },
        _ => GenerationJudgment::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CreatureId;

    fn creature(height: f64, weight: f64, types: &[&str], generation: u32) -> CreatureRecord {
        CreatureRecord::new(
            CreatureId(1),
            "test",
            height,
            weight,
            types.iter().copied(),
            Generation::from_ordinal(generation),
        )
    }

    fn set(tags: &[&str]) -> TypeSet {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn near_guess_is_a_full_match() {
        let answer = creature(1.0, 10.0, &["grass"], 1);
        let guess = creature(1.1, 10.0, &["grass"], 1);

        let judgment = compare(&guess, &answer);

        assert_eq!(judgment.height, NumericJudgment::Match);
        assert_eq!(judgment.weight, NumericJudgment::Match);
        assert_eq!(judgment.types, TypeJudgment::Match);
        assert_eq!(judgment.generation, GenerationJudgment::Match);
        assert!(judgment.is_full_match());
    }

    #[test]
    fn numeric_band_edges_are_inclusive() {
        assert_eq!(compare_numeric(8.0, 10.0), NumericJudgment::Match);
        assert_eq!(compare_numeric(12.0, 10.0), NumericJudgment::Match);
        assert_eq!(compare_numeric(12.5, 10.0), NumericJudgment::TooHigh);
        assert_eq!(compare_numeric(1.5, 2.0), NumericJudgment::TooLow);
    }

    #[test]
    fn zero_or_non_finite_answer_collapses_the_band() {
        assert_eq!(compare_numeric(0.0, 0.0), NumericJudgment::Match);
        assert_eq!(compare_numeric(0.1, 0.0), NumericJudgment::TooHigh);
        assert_eq!(compare_numeric(0.1, f64::NAN), NumericJudgment::TooHigh);
        assert_eq!(compare_numeric(0.0, f64::INFINITY), NumericJudgment::Match);
    }

    #[test]
    fn non_numeric_guess_does_not_match() {
        assert_eq!(compare_numeric(f64::NAN, 10.0), NumericJudgment::TooLow);
        assert_eq!(compare_numeric(f64::NAN, f64::NAN), NumericJudgment::TooLow);
    }

    #[test]
    fn type_overlap() {
        assert_eq!(
            compare_types(&set(&["flying", "ground"]), &set(&["fire", "flying"])),
            TypeJudgment::PartialMatch
        );
        assert_eq!(
            compare_types(&set(&["flying", "fire"]), &set(&["fire", "flying"])),
            TypeJudgment::Match
        );
        assert_eq!(
            compare_types(&set(&["water"]), &set(&["fire"])),
            TypeJudgment::NoMatch
        );
        assert_eq!(compare_types(&set(&[]), &set(&[])), TypeJudgment::NoMatch);
        assert_eq!(
            compare_types(&set(&["fire"]), &set(&[])),
            TypeJudgment::NoMatch
        );
    }

    #[test]
    fn generation_direction() {
        let g = Generation::from_ordinal;
        assert_eq!(compare_generation(g(3), g(5)), GenerationJudgment::TooEarly);
        assert_eq!(compare_generation(g(7), g(5)), GenerationJudgment::TooLate);
        assert_eq!(compare_generation(g(5), g(5)), GenerationJudgment::Match);
        assert_eq!(
            compare_generation(Generation::UNKNOWN, g(5)),
            GenerationJudgment::Unknown
        );
    }

    #[test]
    fn labels_match_feedback_text() {
        assert_eq!(NumericJudgment::TooHigh.to_string(), "Too High");
        assert_eq!(TypeJudgment::PartialMatch.to_string(), "Partial Match");
        assert_eq!(GenerationJudgment::TooEarly.to_string(), "Too early");
        assert_eq!(GenerationJudgment::Unknown.to_string(), "Unknown");
    }
}
