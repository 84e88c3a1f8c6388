use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::client::{AnalysisProvider, ProviderError};
use super::domain::{parse_report, AnalysisReport, AnalysisResponse, CreditsRemaining};
use super::prompt::{user_message, SYSTEM_PROMPT};
use crate::accounts::{
    AnalysisId, AnalysisRecord, AnalysisRepository, CreditCharge, RepositoryError, UserId,
    UserRepository,
};

/// Shorter conversations, after trimming, are rejected.
pub const MIN_CONVERSATION_CHARS: usize = 10;

const UNSTRUCTURED_REPLY: &str = "No se pudo estructurar el análisis";

static ANALYSIS_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_analysis_id() -> AnalysisId {
    let id = ANALYSIS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AnalysisId(format!("analysis-{id:06}"))
}

/// Metered conversation analysis: checks credits, calls the model, charges one
/// credit for a parsed reply, and records diagnoses.
pub struct AnalysisService<U, A, P> {
    users: Arc<U>,
    analyses: Arc<A>,
    provider: Arc<P>,
}

impl<U, A, P> AnalysisService<U, A, P>
where
    U: UserRepository + 'static,
    A: AnalysisRepository + 'static,
    P: AnalysisProvider + 'static,
{
    pub fn new(users: Arc<U>, analyses: Arc<A>, provider: Arc<P>) -> Self {
        Self {
            users,
            analyses,
            provider,
        }
    }

    pub async fn analyze(
        &self,
        user_id: &UserId,
        conversation: &str,
    ) -> Result<AnalysisResponse, AnalysisError> {
        let user = self
            .users
            .find(user_id)
            .await?
            .ok_or(AnalysisError::UserNotFound)?;

        if !user.has_credit() {
            return Err(AnalysisError::OutOfCredits);
        }

        if conversation.trim().chars().count() < MIN_CONVERSATION_CHARS {
            return Err(AnalysisError::ConversationTooShort);
        }

        let context = user.archetype.map(|archetype| archetype.profile());
        let message = user_message(conversation, context);

        let reply = self
            .provider
            .complete(SYSTEM_PROMPT, &message)
            .await
            .map_err(|error| {
                warn!(user = %user_id, %error, "analysis provider call failed");
                AnalysisError::Provider(error)
            })?;

        let report = match parse_report(&reply) {
            Ok(report) => report,
            Err(error) => {
                warn!(user = %user_id, %error, "analysis reply was not valid JSON");
                return Ok(AnalysisResponse::Raw {
                    raw: reply,
                    error: UNSTRUCTURED_REPLY.to_string(),
                });
            }
        };

        // The balance may have moved since the check above.
        let credits_remaining = match self.users.charge_credit(user_id).await? {
            CreditCharge::Charged(balance) => CreditsRemaining::Count(balance),
            CreditCharge::Unmetered => CreditsRemaining::Unlimited,
            CreditCharge::Exhausted => {
                warn!(user = %user_id, "credits ran out before the analysis was charged");
                return Err(AnalysisError::OutOfCredits);
            }
        };

        if let AnalysisReport::Diagnosis(diagnosis) = &report {
            let record = AnalysisRecord {
                id: next_analysis_id(),
                user_id: user_id.clone(),
                input_text: conversation.to_string(),
                mbti_profile: Some(diagnosis.profile.mbti.clone()),
                disc_vector: diagnosis.profile.disc.clone(),
                archetype: Some(diagnosis.archetype.code.clone()),
                diagnosis: Some(diagnosis.failure.explanation.clone()),
                corrections: serde_json::to_value(&diagnosis.corrections).ok(),
                created_at: Utc::now(),
            };
            if let Err(error) = self.analyses.create(record).await {
                warn!(user = %user_id, %error, "failed to store analysis record");
            }
        }

        info!(user = %user_id, credits = ?credits_remaining, "conversation analyzed");

        Ok(AnalysisResponse::Structured {
            analysis: report,
            credits_remaining,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("user not found")]
    UserNotFound,
    #[error("no credits left; upgrade the plan to keep analyzing")]
    OutOfCredits,
    #[error("conversation is too short to analyze")]
    ConversationTooShort,
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
