use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::bank::ARCHETYPE_BANK;
use super::classifier::ArchetypePolicy;
use super::domain::{Choice, QuestionId, QuizMode};
use super::repository::{QuizResultRepository, QuizResultView, StoredQuizResult};
use super::session::{QuizSession, SessionError, Step};
use super::views::QuestionView;
use super::ArchetypeResult;
use crate::accounts::{RepositoryError, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("quiz-{id:06}"))
}

struct OwnedSession {
    owner: UserId,
    session: QuizSession<ArchetypePolicy>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStarted {
    pub session_id: SessionId,
    pub mode: QuizMode,
    pub total: usize,
    pub question: QuestionView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnswerOutcome {
    InProgress {
        session_id: SessionId,
        answered: usize,
        question: QuestionView,
    },
    Completed {
        session_id: SessionId,
        result: ArchetypeResult,
        saved: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        save_error: Option<String>,
    },
}

/// Runs archetype quiz sessions for signed-in users and hands completed results
/// to the persistence bridge.
///
/// A session stays in memory until its result is saved, so a failed save can be
/// retried without retaking the quiz. A save rejected because the account no
/// longer exists releases the session.
pub struct QuizService<R> {
    repository: Arc<R>,
    sessions: Mutex<HashMap<SessionId, OwnedSession>>,
}

impl<R> QuizService<R>
where
    R: QuizResultRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<SessionId, OwnedSession>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions().len()
    }

    /// Open a fresh session for a signed-in user. Each owner has at most one
    /// session in memory, so starting again (a retake) drops the previous one.
    pub async fn start(
        &self,
        owner: &UserId,
        mode: QuizMode,
    ) -> Result<SessionStarted, QuizServiceError> {
        if !self.repository.account_exists(owner).await? {
            return Err(QuizServiceError::AccountNotFound);
        }

        let session = QuizSession::new(ArchetypePolicy, &ARCHETYPE_BANK, mode);
        let total = session.total();
        let (index, question) = session.current().ok_or(SessionError::AlreadyCompleted)?;
        let view = QuestionView::new(question, index, total);

        let session_id = next_session_id();
        let replaced = {
            let mut sessions = self.sessions();
            let before = sessions.len();
            sessions.retain(|_, entry| &entry.owner != owner);
            let replaced = before - sessions.len();
            sessions.insert(
                session_id.clone(),
                OwnedSession {
                    owner: owner.clone(),
                    session,
                },
            );
            replaced
        };

        info!(
            session = %session_id,
            user = %owner,
            mode = mode.as_str(),
            replaced,
            "quiz session started"
        );

        Ok(SessionStarted {
            session_id,
            mode,
            total,
            question: view,
        })
    }

    /// Apply one answer. On the final answer the result is classified and saved;
    /// a failed save is reported in the outcome, never as an error.
    pub async fn submit_answer(
        &self,
        owner: &UserId,
        session_id: &SessionId,
        question_id: QuestionId,
        choice: Choice,
    ) -> Result<AnswerOutcome, QuizServiceError> {
        let (step, total, answered) = {
            let mut sessions = self.sessions();
            let entry = sessions
                .get_mut(session_id)
                .filter(|entry| &entry.owner == owner)
                .ok_or(QuizServiceError::SessionNotFound)?;
            let step = entry.session.submit(question_id, choice)?;
            (step, entry.session.total(), entry.session.answers().len())
        };

        match step {
            Step::Next { index, question } => Ok(AnswerOutcome::InProgress {
                session_id: session_id.clone(),
                answered,
                question: QuestionView::new(question, index, total),
            }),
            Step::Completed(result) => {
                info!(
                    session = %session_id,
                    user = %owner,
                    primary = %result.outcome.primary,
                    "quiz session completed"
                );
                Ok(self.persist(owner, session_id, result).await)
            }
        }
    }

    /// Retry saving a completed session whose earlier save failed.
    pub async fn retry_save(
        &self,
        owner: &UserId,
        session_id: &SessionId,
    ) -> Result<AnswerOutcome, QuizServiceError> {
        let result = {
            let sessions = self.sessions();
            let entry = sessions
                .get(session_id)
                .filter(|entry| &entry.owner == owner)
                .ok_or(QuizServiceError::SessionNotFound)?;
            entry
                .session
                .result()
                .cloned()
                .ok_or(QuizServiceError::NotCompleted)?
        };

        Ok(self.persist(owner, session_id, result).await)
    }

    /// Drop an in-flight session. Nothing was persisted, so this is always safe.
    pub fn discard(&self, owner: &UserId, session_id: &SessionId) -> bool {
        let mut sessions = self.sessions();
        let owned = sessions
            .get(session_id)
            .is_some_and(|entry| &entry.owner == owner);
        owned && sessions.remove(session_id).is_some()
    }

    pub async fn result(&self, owner: &UserId) -> Result<QuizResultView, QuizServiceError> {
        let stored = self.repository.get_result(owner).await?;
        Ok(QuizResultView::from(stored))
    }

    async fn persist(
        &self,
        owner: &UserId,
        session_id: &SessionId,
        result: ArchetypeResult,
    ) -> AnswerOutcome {
        let record = StoredQuizResult {
            user_id: owner.clone(),
            archetype: result.outcome.primary,
            scores: result.scores.clone(),
            completed_at: Utc::now(),
        };

        let save_error = match self.repository.save_result(record).await {
            Ok(()) => {
                self.sessions().remove(session_id);
                None
            }
            Err(RepositoryError::NotFound) => {
                // The account is gone, so a retry cannot succeed.
                self.sessions().remove(session_id);
                warn!(
                    session = %session_id,
                    user = %owner,
                    "account missing, dropping unsaved quiz session"
                );
                Some(RepositoryError::NotFound.to_string())
            }
            Err(error) => {
                warn!(session = %session_id, user = %owner, %error, "failed to save quiz result");
                Some(error.to_string())
            }
        };

        AnswerOutcome::Completed {
            session_id: session_id.clone(),
            result,
            saved: save_error.is_none(),
            save_error,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("quiz session not found")]
    SessionNotFound,
    #[error("no account for this user; sign in first")]
    AccountNotFound,
    #[error("quiz session is not completed yet")]
    NotCompleted,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
