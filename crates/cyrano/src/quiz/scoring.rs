use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{AnswerSet, Dimension, Question};

/// Per-dimension accumulator. Every known dimension is present, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreVector<D: Dimension> {
    values: BTreeMap<D, i32>,
}

impl<D: Dimension> ScoreVector<D> {
    pub fn zeroed() -> Self {
        Self {
            values: D::ALL.iter().map(|dimension| (*dimension, 0)).collect(),
        }
    }

    /// Build a vector from stored values; dimensions not listed stay at zero.
    pub fn from_values(values: impl IntoIterator<Item = (D, i32)>) -> Self {
        let mut vector = Self::zeroed();
        for (dimension, value) in values {
            vector.values.insert(dimension, value);
        }
        vector
    }

    pub fn get(&self, dimension: D) -> i32 {
        self.values.get(&dimension).copied().unwrap_or(0)
    }

    pub fn add(&mut self, dimension: D, delta: i32) {
        *self.values.entry(dimension).or_insert(0) += delta;
    }

    pub fn iter(&self) -> impl Iterator<Item = (D, i32)> + '_ {
        self.values.iter().map(|(dimension, value)| (*dimension, *value))
    }

    pub fn is_zero(&self) -> bool {
        self.values.values().all(|value| *value == 0)
    }

    /// Dot product against a sparse coefficient list.
    pub fn weighted_sum(&self, coefficients: &[(D, i32)]) -> i32 {
        coefficients
            .iter()
            .map(|(dimension, coefficient)| self.get(*dimension) * coefficient)
            .sum()
    }
}

impl<D: Dimension> Default for ScoreVector<D> {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Fold the answers for `questions` into a score vector.
///
/// Questions without an answer contribute nothing, and answers for ids outside
/// `questions` are ignored, so the same answer set scores consistently against
/// the full bank or the quick subset. Values are not clamped.
pub fn score<'a, D, I>(questions: I, answers: &AnswerSet) -> ScoreVector<D>
where
    D: Dimension,
    I: IntoIterator<Item = &'a Question<D>>,
{
    let mut scores = ScoreVector::zeroed();

    for question in questions {
        let Some(choice) = answers.get(question.id) else {
            continue;
        };

        for &(dimension, delta) in question.option(choice).weights {
            scores.add(dimension, delta);
        }
    }

    scores
}
