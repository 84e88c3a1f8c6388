//! Maps a score vector to a categorical outcome. Policies are pure and stateless.

mod archetype;
mod axis;

use std::fmt;

use serde::Serialize;

use super::domain::Dimension;
use super::scoring::ScoreVector;

pub use archetype::{ArchetypeMatch, ArchetypePolicy, ArchetypeRanking, RankScore};
pub use axis::{Axis, AxisLetterPolicy, AxisScore, MbtiProfile};

/// A total function from scores to an outcome for one quiz family.
pub trait ClassificationPolicy: Send + Sync {
    type Dimension: Dimension;
    type Outcome: Clone + PartialEq + fmt::Debug + Serialize + Send + Sync;

    fn classify(&self, scores: &ScoreVector<Self::Dimension>) -> Self::Outcome;
}

/// Outcome plus the raw score vector it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult<O, D: Dimension> {
    #[serde(flatten)]
    pub outcome: O,
    pub scores: ScoreVector<D>,
}

/// Run `policy` and keep the scores next to the outcome.
pub fn classify<P: ClassificationPolicy>(
    policy: &P,
    scores: ScoreVector<P::Dimension>,
) -> ClassificationResult<P::Outcome, P::Dimension> {
    let outcome = policy.classify(&scores);
    ClassificationResult { outcome, scores }
}
