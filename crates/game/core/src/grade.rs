//! Severity tiers for presenting feedback.
//!
//! Tiers only drive visual emphasis; they never decide the round. Each tier
//! is derived from the same judgment the comparator produced, so a field
//! judged `Match` always grades [`Severity::Exact`].
use crate::compare::{
    GenerationJudgment, Judgment, NumericJudgment, TypeJudgment, compare,
};
use crate::config::GameConfig;
use crate::record::{CreatureRecord, Generation};

/// How close a guessed attribute is to the answer, from best to worst.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Exact,
    Close,
    Mid,
    Far,
}

/// Severity of each judged attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grades {
    pub height: Severity,
    pub weight: Severity,
    pub types: Severity,
    pub generation: Severity,
}

/// Judgment and grades of one guess, computed together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Feedback {
    pub judgment: Judgment,
    pub grades: Grades,
}

impl Feedback {
    pub fn evaluate(guess: &CreatureRecord, answer: &CreatureRecord) -> Self {
        let judgment = compare(guess, answer);
        let grades = grade(guess, answer, &judgment);
        Self { judgment, grades }
    }
}

/// Grades every field of an existing judgment.
pub fn grade(guess: &CreatureRecord, answer: &CreatureRecord, judgment: &Judgment) -> Grades {
    Grades {
        height: grade_numeric(guess.height(), answer.height(), judgment.height),
        weight: grade_numeric(guess.weight(), answer.weight(), judgment.weight),
        types: grade_types(judgment.types),
        generation: grade_generation(guess.generation(), answer.generation(), judgment.generation),
    }
}

/// Grades a measurement by relative deviation `|guess - answer| / answer`.
///
/// Exact is read off the judgment: deviation up to 0.20 is the
/// [`GameConfig::BAND_LOWER`]..=[`GameConfig::BAND_UPPER`] band.
///
/// Ungradeable pairs (non-finite guess, non-finite or non-positive answer)
/// are `Far` unless the comparator already judged them a match.
pub fn grade_numeric(guess: f64, answer: f64, judgment: NumericJudgment) -> Severity {
    if judgment == NumericJudgment::Match {
        return Severity::Exact;
    }
    if !guess.is_finite() || !answer.is_finite() || answer <= 0.0 {
        return Severity::Far;
    }

    // Outside the band; a deviation at the exact edge can only come from
    // rounding and still reads as close.
    let deviation = (guess - answer).abs() / answer;
    if deviation <= GameConfig::CLOSE_DEVIATION {
        Severity::Close
    } else if deviation <= GameConfig::MID_DEVIATION {
        Severity::Mid
    } else {
        Severity::Far
    }
}

pub fn grade_types(judgment: TypeJudgment) -> Severity {
    match judgment {
        TypeJudgment::Match => Severity::Exact,
        TypeJudgment::PartialMatch => Severity::Close,
        TypeJudgment::NoMatch => Severity::Far,
    }
}

pub fn grade_generation(guess: Generation, answer: Generation, judgment: GenerationJudgment) -> Severity {
    if judgment == GenerationJudgment::Match {
        return Severity::Exact;
    }
    match (guess.ordinal(), answer.ordinal()) {
        (Some(g), Some(a)) => match g.abs_diff(a) {
            1 => Severity::Close,
            2 => Severity::Mid,
            _ => Severity::Far,
        },
        _ => Severity::Far,
    }
}
