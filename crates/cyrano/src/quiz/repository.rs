use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::archetypes::ArchetypeId;
use super::domain::BehaviorDimension;
use super::scoring::ScoreVector;
use crate::accounts::{RepositoryError, UserId};

/// A completed archetype classification as persisted against the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredQuizResult {
    pub user_id: UserId,
    pub archetype: ArchetypeId,
    pub scores: ScoreVector<BehaviorDimension>,
    pub completed_at: DateTime<Utc>,
}

/// Durable storage for the latest quiz result of each user. A new save replaces
/// the previous one.
#[async_trait]
pub trait QuizResultRepository: Send + Sync {
    /// Whether `user` has an account a result can be saved against.
    async fn account_exists(&self, user: &UserId) -> Result<bool, RepositoryError>;

    async fn save_result(&self, result: StoredQuizResult) -> Result<(), RepositoryError>;

    async fn get_result(&self, user: &UserId)
        -> Result<Option<StoredQuizResult>, RepositoryError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResultView {
    pub has_completed_quiz: bool,
    pub archetype: Option<ArchetypeId>,
    pub scores: Option<ScoreVector<BehaviorDimension>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<Option<StoredQuizResult>> for QuizResultView {
    fn from(value: Option<StoredQuizResult>) -> Self {
        match value {
            Some(stored) => Self {
                has_completed_quiz: true,
                archetype: Some(stored.archetype),
                scores: Some(stored.scores),
                completed_at: Some(stored.completed_at),
            },
            None => Self {
                has_completed_quiz: false,
                archetype: None,
                scores: None,
                completed_at: None,
            },
        }
    }
}
