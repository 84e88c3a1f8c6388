use super::common::*;
use crate::accounts::{Plan, RepositoryError, UserId};
use crate::quiz::{
    AnswerOutcome, ArchetypeId, Choice, QuestionId, QuizMode, QuizServiceError, SessionError,
    SessionId, ARCHETYPE_BANK,
};
use crate::test_support::{user, MemoryStore};

fn owner() -> UserId {
    UserId("user-1".to_string())
}

/// Answer every question of a fresh full session and return the final outcome.
async fn complete_full_quiz<R>(service: &crate::quiz::QuizService<R>) -> (SessionId, AnswerOutcome)
where
    R: crate::quiz::QuizResultRepository + 'static,
{
    let started = service.start(&owner(), QuizMode::Full).await.expect("session starts");
    let mut outcome = None;
    for (question, letter) in ARCHETYPE_BANK.all().iter().zip(CONTROLLING_LETTERS.chars()) {
        let choice = Choice::from_char(letter).expect("valid letter");
        outcome = Some(
            service
                .submit_answer(&owner(), &started.session_id, question.id, choice)
                .await
                .expect("answer accepted"),
        );
    }
    (started.session_id, outcome.expect("twenty answers submitted"))
}

#[tokio::test]
async fn completed_session_is_saved_and_released() {
    let store = store_with_user("user-1");
    let service = service_with(store.clone());

    let (_, outcome) = complete_full_quiz(&service).await;

    match outcome {
        AnswerOutcome::Completed {
            result,
            saved,
            save_error,
            ..
        } => {
            assert_eq!(result.outcome.primary, ArchetypeId::Interrogator);
            assert!(saved);
            assert_eq!(save_error, None);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(service.active_sessions(), 0);

    let stored = store.user("user-1").expect("user exists");
    assert_eq!(stored.archetype, Some(ArchetypeId::Interrogator));
    assert!(stored.quiz_completed_at.is_some());

    let view = service.result(&owner()).await.expect("result loads");
    assert!(view.has_completed_quiz);
    assert_eq!(view.archetype, Some(ArchetypeId::Interrogator));
}

#[tokio::test]
async fn failed_save_still_returns_the_result_with_a_flag() {
    let service = service_with(FlakyResults::new(store_with_user("user-1"), u32::MAX));

    let (session_id, outcome) = complete_full_quiz(&service).await;

    match outcome {
        AnswerOutcome::Completed {
            result,
            saved,
            save_error,
            ..
        } => {
            assert_eq!(result.outcome.primary, ArchetypeId::Interrogator);
            assert!(!saved);
            assert!(save_error.expect("error reported").contains("database offline"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    // The session is kept so the save can be retried.
    assert_eq!(service.active_sessions(), 1);
    let retry = service
        .retry_save(&owner(), &session_id)
        .await
        .expect("retry runs");
    assert!(matches!(retry, AnswerOutcome::Completed { saved: false, .. }));
}

#[tokio::test]
async fn retry_save_succeeds_after_a_transient_failure() {
    let store = store_with_user("user-1");
    let service = service_with(FlakyResults::new(store.clone(), 1));

    let (session_id, outcome) = complete_full_quiz(&service).await;
    assert!(matches!(outcome, AnswerOutcome::Completed { saved: false, .. }));

    let retry = service
        .retry_save(&owner(), &session_id)
        .await
        .expect("retry runs");
    assert!(matches!(retry, AnswerOutcome::Completed { saved: true, .. }));
    assert_eq!(service.active_sessions(), 0);
    assert_eq!(
        store.user("user-1").and_then(|user| user.archetype),
        Some(ArchetypeId::Interrogator)
    );
}

#[tokio::test]
async fn retry_save_requires_a_completed_session() {
    let service = service_with(store_with_user("user-1"));
    let started = service.start(&owner(), QuizMode::Quick).await.expect("session starts");

    let error = service
        .retry_save(&owner(), &started.session_id)
        .await
        .expect_err("nothing to save yet");
    assert!(matches!(error, QuizServiceError::NotCompleted));
}

#[tokio::test]
async fn sessions_are_private_to_their_owner() {
    let service = service_with(store_with_user("user-1"));
    let started = service.start(&owner(), QuizMode::Full).await.expect("session starts");
    let intruder = UserId("user-2".to_string());

    let error = service
        .submit_answer(&intruder, &started.session_id, QuestionId(1), Choice::A)
        .await
        .expect_err("other users cannot answer");
    assert!(matches!(error, QuizServiceError::SessionNotFound));
    assert!(!service.discard(&intruder, &started.session_id));
    assert!(service.discard(&owner(), &started.session_id));
    assert_eq!(service.active_sessions(), 0);
}

#[tokio::test]
async fn only_signed_in_users_can_start_a_session() {
    let service = service_with(store_with_user("user-1"));

    for attempt in 0..50 {
        let stranger = UserId(format!("stranger-{attempt}"));
        let error = service
            .start(&stranger, QuizMode::Quick)
            .await
            .expect_err("no account");
        assert!(matches!(error, QuizServiceError::AccountNotFound));
    }
    assert_eq!(service.active_sessions(), 0);
}

#[tokio::test]
async fn starting_again_replaces_the_open_session() {
    let service = service_with(store_with_user("user-1"));
    let first = service.start(&owner(), QuizMode::Full).await.expect("session starts");
    for _ in 0..20 {
        service.start(&owner(), QuizMode::Quick).await.expect("session starts");
    }
    let latest = service.start(&owner(), QuizMode::Full).await.expect("session starts");

    assert_eq!(service.active_sessions(), 1);
    let error = service
        .submit_answer(&owner(), &first.session_id, QuestionId(1), Choice::A)
        .await
        .expect_err("replaced session is gone");
    assert!(matches!(error, QuizServiceError::SessionNotFound));
    service
        .submit_answer(&owner(), &latest.session_id, QuestionId(1), Choice::A)
        .await
        .expect("latest session accepts answers");
}

#[tokio::test]
async fn open_sessions_of_other_users_are_kept() {
    let service = service_with(MemoryStore::with_users([
        user("user-1", Plan::Free, 3),
        user("user-2", Plan::Free, 3),
    ]));

    service.start(&owner(), QuizMode::Quick).await.expect("session starts");
    service
        .start(&UserId("user-2".to_string()), QuizMode::Quick)
        .await
        .expect("session starts");
    assert_eq!(service.active_sessions(), 2);
}

#[tokio::test]
async fn deleted_account_releases_the_unsaved_session() {
    let store = store_with_user("user-1");
    let service = service_with(store.clone());
    let started = service.start(&owner(), QuizMode::Quick).await.expect("session starts");
    store.users.lock().expect("lock").remove(&owner());

    let mut outcome = None;
    for question in ARCHETYPE_BANK.sequence(QuizMode::Quick) {
        outcome = Some(
            service
                .submit_answer(&owner(), &started.session_id, question.id, Choice::B)
                .await
                .expect("answer accepted"),
        );
    }

    match outcome.expect("answers submitted") {
        AnswerOutcome::Completed {
            saved, save_error, ..
        } => {
            assert!(!saved);
            assert_eq!(save_error, Some(RepositoryError::NotFound.to_string()));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(service.active_sessions(), 0);
    let error = service
        .retry_save(&owner(), &started.session_id)
        .await
        .expect_err("nothing left to retry");
    assert!(matches!(error, QuizServiceError::SessionNotFound));
}

#[tokio::test]
async fn out_of_order_answers_surface_as_session_errors() {
    let service = service_with(store_with_user("user-1"));
    let started = service.start(&owner(), QuizMode::Full).await.expect("session starts");
    assert_eq!(started.total, 20);
    assert_eq!(started.question.position, 1);

    let error = service
        .submit_answer(&owner(), &started.session_id, QuestionId(2), Choice::A)
        .await
        .expect_err("question 1 is awaited");
    assert!(matches!(
        error,
        QuizServiceError::Session(SessionError::UnexpectedQuestion { .. })
    ));

    let next = service
        .submit_answer(&owner(), &started.session_id, QuestionId(1), Choice::A)
        .await
        .expect("in-order answer accepted");
    match next {
        AnswerOutcome::InProgress {
            answered, question, ..
        } => {
            assert_eq!(answered, 1);
            assert_eq!(question.id, QuestionId(2));
            assert_eq!(question.position, 2);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn result_for_a_user_without_a_quiz_is_empty() {
    let service = service_with(store_with_user("user-1"));
    let view = service.result(&owner()).await.expect("result loads");
    assert!(!view.has_completed_quiz);
    assert_eq!(view.archetype, None);
}
