use serde::{Serialize, Serializer};

use crate::quiz::archetypes::ArchetypeId;
use crate::quiz::domain::BehaviorDimension::{
    self, Control, Emotion, Initiative, Patience, Validation, Vulnerability,
};
use crate::quiz::scoring::ScoreVector;

use super::ClassificationPolicy;

/// Archetype rank in half-points, so the 0.5 and 1.5 coefficients stay integral
/// and comparisons are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankScore(i32);

impl RankScore {
    pub fn from_half_points(half_points: i32) -> Self {
        Self(half_points)
    }

    pub fn half_points(self) -> i32 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl Serialize for RankScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchetypeRanking {
    pub archetype: ArchetypeId,
    pub score: RankScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchetypeMatch {
    pub primary: ArchetypeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<ArchetypeId>,
    /// All six archetypes, best first.
    pub rankings: Vec<ArchetypeRanking>,
}

/// Ranks the six archetypes by fixed linear formulas over the behavior scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchetypePolicy;

/// Formula coefficients, doubled.
fn rank_coefficients(archetype: ArchetypeId) -> &'static [(BehaviorDimension, i32)] {
    match archetype {
        ArchetypeId::Interrogator => &[(Control, 4), (Emotion, -2), (Patience, -2)],
        ArchetypeId::Pleaser => &[(Validation, 3), (Initiative, -2), (Patience, 1), (Control, -2)],
        ArchetypeId::Logician => &[(Emotion, -4), (Vulnerability, -2), (Control, 2)],
        ArchetypeId::Clown => &[(Vulnerability, -4), (Initiative, 1), (Emotion, -1)],
        ArchetypeId::Anxious => &[(Validation, 4), (Patience, -4), (Emotion, 1)],
        ArchetypeId::Ghost => &[(Initiative, -4), (Vulnerability, -2), (Emotion, -1)],
    }
}

pub(crate) fn rank_score(
    archetype: ArchetypeId,
    scores: &ScoreVector<BehaviorDimension>,
) -> RankScore {
    RankScore(scores.weighted_sum(rank_coefficients(archetype)))
}

impl ClassificationPolicy for ArchetypePolicy {
    type Dimension = BehaviorDimension;
    type Outcome = ArchetypeMatch;

    fn classify(&self, scores: &ScoreVector<BehaviorDimension>) -> ArchetypeMatch {
        let mut rankings = ArchetypeId::ALL.map(|archetype| ArchetypeRanking {
            archetype,
            score: rank_score(archetype, scores),
        });

        // Stable, so equal scores keep declaration order.
        rankings.sort_by(|left, right| right.score.cmp(&left.score));

        let primary = rankings[0].archetype;
        let secondary = rankings[1]
            .score
            .is_positive()
            .then_some(rankings[1].archetype);

        ArchetypeMatch {
            primary,
            secondary,
            rankings: rankings.to_vec(),
        }
    }
}
