use serde::Serialize;

use crate::quiz::archetypes::{mbti_description, MbtiDescription};
use crate::quiz::domain::{Dimension, MbtiLetter};
use crate::quiz::scoring::ScoreVector;

use super::ClassificationPolicy;

/// One of the four opposing letter pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    #[serde(rename = "EI")]
    Energy,
    #[serde(rename = "SN")]
    Information,
    #[serde(rename = "TF")]
    Decisions,
    #[serde(rename = "JP")]
    Lifestyle,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Energy, Axis::Information, Axis::Decisions, Axis::Lifestyle];

    /// The first letter wins ties.
    pub fn letters(self) -> (MbtiLetter, MbtiLetter) {
        match self {
            Axis::Energy => (MbtiLetter::E, MbtiLetter::I),
            Axis::Information => (MbtiLetter::S, MbtiLetter::N),
            Axis::Decisions => (MbtiLetter::T, MbtiLetter::F),
            Axis::Lifestyle => (MbtiLetter::J, MbtiLetter::P),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisScore {
    pub axis: Axis,
    pub letter: MbtiLetter,
    /// Share of answers on this axis that went to the axis's first letter.
    pub first_letter_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MbtiProfile {
    pub code: String,
    pub axes: Vec<AxisScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static MbtiDescription>,
}

/// Picks the stronger letter on each axis and concatenates the four picks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisLetterPolicy;

/// `round(100 * first / (first + second))`, or 50 for an unanswered axis.
fn first_letter_percent(first: i32, second: i32) -> u8 {
    let total = first + second;
    if total <= 0 {
        return 50;
    }
    let percent = (200 * first + total) / (2 * total);
    u8::try_from(percent.clamp(0, 100)).unwrap_or(50)
}

impl ClassificationPolicy for AxisLetterPolicy {
    type Dimension = MbtiLetter;
    type Outcome = MbtiProfile;

    fn classify(&self, scores: &ScoreVector<MbtiLetter>) -> MbtiProfile {
        let axes: Vec<AxisScore> = Axis::ALL
            .into_iter()
            .map(|axis| {
                let (first, second) = axis.letters();
                let first_count = scores.get(first);
                let second_count = scores.get(second);
                AxisScore {
                    axis,
                    letter: if first_count >= second_count { first } else { second },
                    first_letter_percent: first_letter_percent(first_count, second_count),
                }
            })
            .collect();

        let code: String = axes
            .iter()
            .map(|axis| axis.letter.label())
            .collect();

        MbtiProfile {
            description: mbti_description(&code),
            code,
            axes,
        }
    }
}
