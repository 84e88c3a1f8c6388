use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::domain::{AnalysisRecord, CreditCharge, Plan, User, UserFilter, UserId};
use crate::quiz::ArchetypeId;

/// Storage failures shared by every repository in the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Account storage.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> Result<User, RepositoryError>;

    async fn find(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    async fn update(&self, user: User) -> Result<(), RepositoryError>;

    /// Removes the user together with their analyses.
    async fn delete(&self, id: &UserId) -> Result<(), RepositoryError>;

    /// Newest accounts first.
    async fn list(
        &self,
        filter: &UserFilter,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<User>, RepositoryError>;

    async fn count(&self, filter: &UserFilter) -> Result<u64, RepositoryError>;

    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, RepositoryError>;

    /// Debit one credit as a single conditional update: metered balances only
    /// go down while they are positive.
    async fn charge_credit(&self, id: &UserId) -> Result<CreditCharge, RepositoryError>;

    async fn plan_counts(&self) -> Result<Vec<(Plan, u64)>, RepositoryError>;

    /// Only users with a stored archetype are counted.
    async fn archetype_counts(&self) -> Result<Vec<(ArchetypeId, u64)>, RepositoryError>;
}

/// Storage for conversation analyses.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    async fn create(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError>;

    /// Newest first.
    async fn recent_for_user(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<AnalysisRecord>, RepositoryError>;

    async fn count_for_user(&self, user: &UserId) -> Result<u64, RepositoryError>;

    /// Count every analysis, or only those created at or after `since`.
    async fn count(&self, since: Option<DateTime<Utc>>) -> Result<u64, RepositoryError>;
}
