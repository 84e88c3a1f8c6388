use std::sync::Arc;

use axum::Router;

use crate::accounts::Plan;
use crate::quiz::{
    answers_from_letters, quiz_router, AnswerSet, QuizMode, QuizResultRepository, QuizService,
    ARCHETYPE_BANK, MBTI_BANK,
};
use crate::test_support::{user, MemoryStore};

pub(super) use crate::test_support::{caller_headers, read_json_body, FlakyResults, UnavailableStore};

/// Every question answered with the option that pushes control up and
/// emotion and patience down; ties go to the option that lowers validation.
pub(super) const CONTROLLING_LETTERS: &str = "AAABAABABBAAAAAABBAA";

pub(super) fn controlling_answers() -> AnswerSet {
    answers_from_letters(&ARCHETYPE_BANK.sequence(QuizMode::Full), CONTROLLING_LETTERS)
        .expect("valid letters")
}

pub(super) fn mbti_answers(letters: &str) -> AnswerSet {
    answers_from_letters(&MBTI_BANK.sequence(QuizMode::Full), letters).expect("valid letters")
}

pub(super) fn store_with_user(id: &str) -> MemoryStore {
    MemoryStore::with_users([user(id, Plan::Free, 3)])
}

pub(super) fn service_with<R: QuizResultRepository + 'static>(repository: R) -> Arc<QuizService<R>> {
    Arc::new(QuizService::new(Arc::new(repository)))
}

pub(super) fn router_with<R: QuizResultRepository + 'static>(service: Arc<QuizService<R>>) -> Router {
    quiz_router(service)
}
