use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cyrano::accounts::{
    AnalysisRecord, AnalysisRepository, CreditCharge, Plan, RepositoryError, User, UserFilter,
    UserId, UserRepository,
};
use cyrano::quiz::{ArchetypeId, QuizResultRepository, StoredQuizResult};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local storage for users, their analyses, and quiz results. Quiz
/// results live on the user row, so saving one requires the account to exist.
#[derive(Default, Clone)]
pub(crate) struct InMemoryStore {
    users: Arc<Mutex<HashMap<UserId, User>>>,
    analyses: Arc<Mutex<Vec<AnalysisRecord>>>,
}

impl InMemoryStore {
    fn users(&self) -> MutexGuard<'_, HashMap<UserId, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn analyses(&self) -> MutexGuard<'_, Vec<AnalysisRecord>> {
        self.analyses.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn matching_users(&self, filter: &UserFilter) -> Vec<User> {
        self.users()
            .values()
            .filter(|user| filter.matches(user))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, user: User) -> Result<User, RepositoryError> {
        let mut guard = self.users();
        if guard.contains_key(&user.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users().get(id).cloned())
    }

    async fn update(&self, user: User) -> Result<(), RepositoryError> {
        let mut guard = self.users();
        match guard.get_mut(&user.id) {
            Some(existing) => {
                *existing = user;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        if self.users().remove(id).is_none() {
            return Err(RepositoryError::NotFound);
        }
        self.analyses().retain(|record| &record.user_id != id);
        Ok(())
    }

    async fn list(
        &self,
        filter: &UserFilter,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<User>, RepositoryError> {
        let mut users = self.matching_users(filter);
        users.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        Ok(users.into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self, filter: &UserFilter) -> Result<u64, RepositoryError> {
        Ok(self.matching_users(filter).len() as u64)
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, RepositoryError> {
        Ok(self
            .users()
            .values()
            .filter(|user| user.created_at >= since)
            .count() as u64)
    }

    async fn charge_credit(&self, id: &UserId) -> Result<CreditCharge, RepositoryError> {
        let mut guard = self.users();
        let user = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        Ok(user.charge_credit())
    }

    async fn plan_counts(&self) -> Result<Vec<(Plan, u64)>, RepositoryError> {
        let mut counts: BTreeMap<Plan, u64> = BTreeMap::new();
        for user in self.users().values() {
            *counts.entry(user.plan).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }

    async fn archetype_counts(&self) -> Result<Vec<(ArchetypeId, u64)>, RepositoryError> {
        let mut counts: BTreeMap<ArchetypeId, u64> = BTreeMap::new();
        for archetype in self.users().values().filter_map(|user| user.archetype) {
            *counts.entry(archetype).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryStore {
    async fn create(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        if !self.users().contains_key(&record.user_id) {
            return Err(RepositoryError::NotFound);
        }
        self.analyses().push(record.clone());
        Ok(record)
    }

    async fn recent_for_user(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        let mut records: Vec<AnalysisRecord> = self
            .analyses()
            .iter()
            .filter(|record| &record.user_id == user)
            .cloned()
            .collect();
        records.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        records.truncate(limit);
        Ok(records)
    }

    async fn count_for_user(&self, user: &UserId) -> Result<u64, RepositoryError> {
        Ok(self
            .analyses()
            .iter()
            .filter(|record| &record.user_id == user)
            .count() as u64)
    }

    async fn count(&self, since: Option<DateTime<Utc>>) -> Result<u64, RepositoryError> {
        Ok(self
            .analyses()
            .iter()
            .filter(|record| since.map_or(true, |since| record.created_at >= since))
            .count() as u64)
    }
}

#[async_trait]
impl QuizResultRepository for InMemoryStore {
    async fn account_exists(&self, user: &UserId) -> Result<bool, RepositoryError> {
        Ok(self.users().contains_key(user))
    }

    async fn save_result(&self, result: StoredQuizResult) -> Result<(), RepositoryError> {
        let mut guard = self.users();
        let user = guard
            .get_mut(&result.user_id)
            .ok_or(RepositoryError::NotFound)?;
        user.archetype = Some(result.archetype);
        user.archetype_scores = Some(result.scores);
        user.quiz_completed_at = Some(result.completed_at);
        Ok(())
    }

    async fn get_result(
        &self,
        user: &UserId,
    ) -> Result<Option<StoredQuizResult>, RepositoryError> {
        let guard = self.users();
        let Some(stored) = guard.get(user) else {
            return Ok(None);
        };
        Ok(
            match (stored.archetype, &stored.archetype_scores, stored.quiz_completed_at) {
                (Some(archetype), Some(scores), Some(completed_at)) => Some(StoredQuizResult {
                    user_id: user.clone(),
                    archetype,
                    scores: scores.clone(),
                    completed_at,
                }),
                _ => None,
            },
        )
    }
}
