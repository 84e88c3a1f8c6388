//! In-memory doubles shared by the unit test modules.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::accounts::{
    AnalysisRecord, AnalysisRepository, CreditCharge, Plan, RepositoryError, Role, User,
    UserFilter, UserId, UserProfile, UserRepository,
};
use crate::analysis::{AnalysisProvider, ProviderError};
use crate::identity::USER_HEADER;
use crate::quiz::{ArchetypeId, QuizResultRepository, StoredQuizResult};

/// Users, analyses, and quiz results behind one lock, mirroring a single
/// relational store where deleting a user cascades.
#[derive(Default, Clone)]
pub(crate) struct MemoryStore {
    pub(crate) users: Arc<Mutex<HashMap<UserId, User>>>,
    pub(crate) analyses: Arc<Mutex<Vec<AnalysisRecord>>>,
    pub(crate) saved_results: Arc<Mutex<Vec<StoredQuizResult>>>,
}

impl MemoryStore {
    pub(crate) fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let store = Self::default();
        {
            let mut guard = store.users.lock().expect("lock");
            for user in users {
                guard.insert(user.id.clone(), user);
            }
        }
        store
    }

    pub(crate) fn user(&self, id: &str) -> Option<User> {
        self.users
            .lock()
            .expect("lock")
            .get(&UserId(id.to_string()))
            .cloned()
    }

    pub(crate) fn analyses(&self) -> Vec<AnalysisRecord> {
        self.analyses.lock().expect("lock").clone()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, user: User) -> Result<User, RepositoryError> {
        let mut guard = self.users.lock().expect("lock");
        if guard.contains_key(&user.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.lock().expect("lock").get(id).cloned())
    }

    async fn update(&self, user: User) -> Result<(), RepositoryError> {
        let mut guard = self.users.lock().expect("lock");
        match guard.get_mut(&user.id) {
            Some(existing) => {
                *existing = user;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        if self.users.lock().expect("lock").remove(id).is_none() {
            return Err(RepositoryError::NotFound);
        }
        self.analyses
            .lock()
            .expect("lock")
            .retain(|record| &record.user_id != id);
        Ok(())
    }

    async fn list(
        &self,
        filter: &UserFilter,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<User>, RepositoryError> {
        let mut users: Vec<User> = self
            .users
            .lock()
            .expect("lock")
            .values()
            .filter(|user| filter.matches(user))
            .cloned()
            .collect();
        users.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        Ok(users.into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self, filter: &UserFilter) -> Result<u64, RepositoryError> {
        Ok(self
            .users
            .lock()
            .expect("lock")
            .values()
            .filter(|user| filter.matches(user))
            .count() as u64)
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, RepositoryError> {
        Ok(self
            .users
            .lock()
            .expect("lock")
            .values()
            .filter(|user| user.created_at >= since)
            .count() as u64)
    }

    async fn charge_credit(&self, id: &UserId) -> Result<CreditCharge, RepositoryError> {
        let mut guard = self.users.lock().expect("lock");
        let user = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        Ok(user.charge_credit())
    }

    async fn plan_counts(&self) -> Result<Vec<(Plan, u64)>, RepositoryError> {
        let mut counts: BTreeMap<Plan, u64> = BTreeMap::new();
        for user in self.users.lock().expect("lock").values() {
            *counts.entry(user.plan).or_insert(0) += 1;
        }
        Ok(counts.into_iter().collect())
    }

    async fn archetype_counts(&self) -> Result<Vec<(ArchetypeId, u64)>, RepositoryError> {
        let mut counts: BTreeMap<ArchetypeId, u64> = BTreeMap::new();
        for user in self.users.lock().expect("lock").values() {
            if let Some(archetype) = user.archetype {
                *counts.entry(archetype).or_insert(0) += 1;
            }
        }
        Ok(counts.into_iter().collect())
    }
}

#[async_trait]
impl AnalysisRepository for MemoryStore {
    async fn create(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        self.analyses.lock().expect("lock").push(record.clone());
        Ok(record)
    }

    async fn recent_for_user(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        let mut records: Vec<AnalysisRecord> = self
            .analyses
            .lock()
            .expect("lock")
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
            .analyses
            .lock()
            .expect("lock")
            .iter()
            .filter(|record| &record.user_id == user)
            .count() as u64)
    }

    async fn count(&self, since: Option<DateTime<Utc>>) -> Result<u64, RepositoryError> {
        Ok(self
            .analyses
            .lock()
            .expect("lock")
            .iter()
            .filter(|record| since.map_or(true, |since| record.created_at >= since))
            .count() as u64)
    }
}

#[async_trait]
impl QuizResultRepository for MemoryStore {
    async fn account_exists(&self, user: &UserId) -> Result<bool, RepositoryError> {
        Ok(self.users.lock().expect("lock").contains_key(user))
    }

    async fn save_result(&self, result: StoredQuizResult) -> Result<(), RepositoryError> {
        {
            let mut guard = self.users.lock().expect("lock");
            let user = guard
                .get_mut(&result.user_id)
                .ok_or(RepositoryError::NotFound)?;
            user.archetype = Some(result.archetype);
            user.archetype_scores = Some(result.scores.clone());
            user.quiz_completed_at = Some(result.completed_at);
        }
        self.saved_results.lock().expect("lock").push(result);
        Ok(())
    }

    async fn get_result(
        &self,
        user: &UserId,
    ) -> Result<Option<StoredQuizResult>, RepositoryError> {
        let guard = self.users.lock().expect("lock");
        let Some(stored) = guard.get(user) else {
            return Ok(None);
        };
        Ok(match (stored.archetype, &stored.archetype_scores, stored.quiz_completed_at) {
            (Some(archetype), Some(scores), Some(completed_at)) => Some(StoredQuizResult {
                user_id: user.clone(),
                archetype,
                scores: scores.clone(),
                completed_at,
            }),
            _ => None,
        })
    }
}

/// Every call fails as if the database were down.
#[derive(Default, Clone, Copy)]
pub(crate) struct UnavailableStore;

fn unavailable() -> RepositoryError {
    RepositoryError::Unavailable("database offline".to_string())
}

#[async_trait]
impl QuizResultRepository for UnavailableStore {
    async fn account_exists(&self, _user: &UserId) -> Result<bool, RepositoryError> {
        Err(unavailable())
    }

    async fn save_result(&self, _result: StoredQuizResult) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    async fn get_result(
        &self,
        _user: &UserId,
    ) -> Result<Option<StoredQuizResult>, RepositoryError> {
        Err(unavailable())
    }
}

#[async_trait]
impl AnalysisRepository for UnavailableStore {
    async fn create(&self, _record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        Err(unavailable())
    }

    async fn recent_for_user(
        &self,
        _user: &UserId,
        _limit: usize,
    ) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        Err(unavailable())
    }

    async fn count_for_user(&self, _user: &UserId) -> Result<u64, RepositoryError> {
        Err(unavailable())
    }

    async fn count(&self, _since: Option<DateTime<Utc>>) -> Result<u64, RepositoryError> {
        Err(unavailable())
    }
}

/// Saves fail a fixed number of times, then delegate to the inner store. Reads
/// always delegate.
pub(crate) struct FlakyResults {
    pub(crate) inner: MemoryStore,
    pub(crate) failures_left: Mutex<u32>,
}

impl FlakyResults {
    pub(crate) fn new(inner: MemoryStore, failures: u32) -> Self {
        Self {
            inner,
            failures_left: Mutex::new(failures),
        }
    }
}

#[async_trait]
impl QuizResultRepository for FlakyResults {
    async fn account_exists(&self, user: &UserId) -> Result<bool, RepositoryError> {
        self.inner.account_exists(user).await
    }

    async fn save_result(&self, result: StoredQuizResult) -> Result<(), RepositoryError> {
        {
            let mut left = self.failures_left.lock().expect("lock");
            if *left > 0 {
                *left -= 1;
                return Err(unavailable());
            }
        }
        self.inner.save_result(result).await
    }

    async fn get_result(
        &self,
        user: &UserId,
    ) -> Result<Option<StoredQuizResult>, RepositoryError> {
        self.inner.get_result(user).await
    }
}

/// Replays canned provider replies and records the prompts it was given.
#[derive(Default)]
pub(crate) struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    pub(crate) prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub(crate) fn replying(reply: &str) -> Self {
        Self::with(Ok(reply.to_string()))
    }

    pub(crate) fn with(reply: Result<String, ProviderError>) -> Self {
        let provider = Self::default();
        provider.replies.lock().expect("lock").push_back(reply);
        provider
    }

    pub(crate) fn replying_each(replies: &[&str]) -> Self {
        let provider = Self::default();
        provider
            .replies
            .lock()
            .expect("lock")
            .extend(replies.iter().map(|reply| Ok(reply.to_string())));
        provider
    }

    pub(crate) fn calls(&self) -> usize {
        self.prompts.lock().expect("lock").len()
    }
}

#[async_trait]
impl AnalysisProvider for ScriptedProvider {
    async fn complete(&self, _system: &str, user: &str) -> Result<String, ProviderError> {
        self.prompts.lock().expect("lock").push(user.to_string());
        // Suspend once, like a network round trip, so concurrent callers interleave.
        tokio::task::yield_now().await;
        self.replies
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or(Err(ProviderError::EmptyResponse))
    }
}

pub(crate) fn user(id: &str, plan: Plan, credits: i32) -> User {
    let mut user = User::new(
        UserProfile {
            id: UserId(id.to_string()),
            name: Some(format!("{id} name")),
            email: Some(format!("{id}@example.com")),
            image: None,
        },
        credits,
        Role::User,
        Utc::now(),
    );
    user.plan = plan;
    user
}

pub(crate) fn admin(id: &str) -> User {
    let mut admin = user(id, Plan::Pro, 0);
    admin.role = Role::Admin;
    admin
}

pub(crate) fn caller_headers(id: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_HEADER,
        HeaderValue::from_str(id).expect("valid header value"),
    );
    headers
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
